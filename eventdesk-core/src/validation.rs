//! Field-level validation of candidate events.
//!
//! Every field is checked on each pass and all violations are reported
//! together, keyed by field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::Serialize;

use crate::event::{Event, parse_clock_time};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

const NAME_MIN_CHARS: usize = 2;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Date,
    Time,
    Capacity,
    Venue,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Date => "date",
            Field::Time => "time",
            Field::Capacity => "capacity",
            Field::Venue => "venue",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name → error message. Empty means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw, untyped event input as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub capacity: String,
    pub venue: String,
    pub description: String,
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        EventDraft {
            id: Some(event.id.clone()),
            name: event.name.clone(),
            email: event.organizer_email.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.time.format("%H:%M").to_string(),
            capacity: event.capacity.to_string(),
            venue: event.venue.clone(),
            description: event.description.clone().unwrap_or_default(),
        }
    }
}

impl EventDraft {
    pub fn validate(&self, today: NaiveDate) -> ValidationErrors {
        validate(self, today)
    }

    /// Validate and convert into a typed event.
    ///
    /// A draft without an id gets a fresh one.
    pub fn into_event(self, today: NaiveDate) -> Result<Event, ValidationErrors> {
        let checked = check(&self, today);
        if !checked.errors.is_empty() {
            return Err(checked.errors);
        }

        let (Some(date), Some(time), Some(capacity)) = (checked.date, checked.time, checked.capacity)
        else {
            return Err(checked.errors);
        };

        let description = self.description.trim();

        Ok(Event {
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(Event::new_id),
            name: self.name.trim().to_string(),
            organizer_email: self.email.trim().to_string(),
            date,
            time,
            capacity,
            venue: self.venue.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Check every field of `draft`; `today` is the earliest allowed date.
pub fn validate(draft: &EventDraft, today: NaiveDate) -> ValidationErrors {
    check(draft, today).errors
}

struct Checked {
    errors: ValidationErrors,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    capacity: Option<u32>,
}

fn check(draft: &EventDraft, today: NaiveDate) -> Checked {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().chars().count() < NAME_MIN_CHARS {
        errors.insert(Field::Name, "Name too short");
    }

    if !EMAIL_PATTERN.is_match(draft.email.trim()) {
        errors.insert(Field::Email, "Email invalid");
    }

    let date_raw = draft.date.trim();
    let date = if date_raw.is_empty() {
        errors.insert(Field::Date, "Date required");
        None
    } else {
        match NaiveDate::parse_from_str(date_raw, "%Y-%m-%d") {
            Ok(date) if date < today => {
                errors.insert(Field::Date, "Date must be today or later");
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert(Field::Date, "Date invalid");
                None
            }
        }
    };

    let time = if draft.time.trim().is_empty() {
        errors.insert(Field::Time, "Time required");
        None
    } else {
        let parsed = parse_clock_time(&draft.time);
        if parsed.is_none() {
            errors.insert(Field::Time, "Time invalid");
        }
        parsed
    };

    let capacity = parse_capacity(&draft.capacity);
    if capacity.is_none() {
        errors.insert(Field::Capacity, "Capacity must be positive integer");
    }

    if draft.venue.trim().is_empty() {
        errors.insert(Field::Venue, "Venue required");
    }

    Checked {
        errors,
        date,
        time,
        capacity,
    }
}

/// Numeric input counts as an integer when it has no fractional part, so
/// "12" and "12.0" are both accepted.
fn parse_capacity(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}
