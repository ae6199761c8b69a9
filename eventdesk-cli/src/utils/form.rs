//! The add/edit event form.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Args;
use eventdesk_core::{Event, EventDraft, Field};

use crate::render::{Palette, render_errors};
use crate::utils::prompt;

/// Event fields given as flags. Anything left out keeps its current value.
#[derive(Args, Debug, Default)]
pub struct EventFields {
    /// Event name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Organizer email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start time (HH:MM, 24h)
    #[arg(short, long)]
    pub time: Option<String>,

    /// Number of seats
    #[arg(short, long)]
    pub capacity: Option<String>,

    /// Venue
    #[arg(short, long)]
    pub venue: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,
}

impl EventFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.capacity.is_none()
            && self.venue.is_none()
            && self.description.is_none()
    }

    /// Overlay the given flags onto `draft`.
    pub fn apply(self, draft: &mut EventDraft) {
        let EventFields {
            name,
            email,
            date,
            time,
            capacity,
            venue,
            description,
        } = self;

        for (field, value) in [
            (Field::Name, name),
            (Field::Email, email),
            (Field::Date, date),
            (Field::Time, time),
            (Field::Capacity, capacity),
            (Field::Venue, venue),
        ] {
            if let Some(value) = value {
                set(draft, field, value);
            }
        }

        if let Some(description) = description {
            draft.description = description;
        }
    }
}

const FORM_FIELDS: [Field; 6] = [
    Field::Name,
    Field::Email,
    Field::Date,
    Field::Time,
    Field::Capacity,
    Field::Venue,
];

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "  Name",
        Field::Email => "  Organizer email",
        Field::Date => "  Date (YYYY-MM-DD)",
        Field::Time => "  Time (HH:MM)",
        Field::Capacity => "  Capacity",
        Field::Venue => "  Venue",
    }
}

fn value(draft: &EventDraft, field: Field) -> &str {
    match field {
        Field::Name => &draft.name,
        Field::Email => &draft.email,
        Field::Date => &draft.date,
        Field::Time => &draft.time,
        Field::Capacity => &draft.capacity,
        Field::Venue => &draft.venue,
    }
}

fn set(draft: &mut EventDraft, field: Field, value: String) {
    match field {
        Field::Name => draft.name = value,
        Field::Email => draft.email = value,
        Field::Date => draft.date = value,
        Field::Time => draft.time = value,
        Field::Capacity => draft.capacity = value,
        Field::Venue => draft.venue = value,
    }
}

/// Prompt for form fields, pre-filled with the draft's values.
/// With `only_empty`, fields that already have a value are skipped.
pub fn prompt_fields(draft: &mut EventDraft, only_empty: bool) -> Result<()> {
    for field in FORM_FIELDS {
        if only_empty && !value(draft, field).trim().is_empty() {
            continue;
        }
        let input = prompt::text(label(field), value(draft, field))?;
        set(draft, field, input);
    }

    if !only_empty || draft.description.is_empty() {
        draft.description = prompt::text("  Description (skip)", &draft.description)?;
    }

    Ok(())
}

/// Validate the draft. Interactive forms re-prompt the invalid fields until
/// they pass; otherwise the errors are printed and the command fails.
pub fn submit(
    mut draft: EventDraft,
    today: NaiveDate,
    interactive: bool,
    palette: &Palette,
) -> Result<Event> {
    loop {
        let errors = match draft.clone().into_event(today) {
            Ok(event) => return Ok(event),
            Err(errors) => errors,
        };

        eprintln!("{}", render_errors(&errors, palette));

        if !interactive {
            bail!("Event not saved");
        }

        for (field, _) in errors.iter() {
            let input = prompt::text(label(field), value(&draft, field))?;
            set(&mut draft, field, input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overlays_only_given_fields() {
        let mut draft = EventDraft {
            name: "Old name".to_string(),
            venue: "Old venue".to_string(),
            description: "Keep me".to_string(),
            ..Default::default()
        };

        EventFields {
            name: Some("New name".to_string()),
            capacity: Some("30".to_string()),
            ..Default::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.name, "New name");
        assert_eq!(draft.capacity, "30");
        assert_eq!(draft.venue, "Old venue");
        assert_eq!(draft.description, "Keep me");
    }

    #[test]
    fn test_is_empty() {
        assert!(EventFields::default().is_empty());
        let fields = EventFields {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_value_and_set_address_the_same_field() {
        let mut draft = EventDraft::default();
        for field in FORM_FIELDS {
            set(&mut draft, field, field.as_str().to_string());
        }
        for field in FORM_FIELDS {
            assert_eq!(value(&draft, field), field.as_str());
        }
    }

    #[test]
    fn test_non_interactive_submit_fails_on_errors() {
        let palette = Palette::new(eventdesk_core::theme::Theme::Light);
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert!(submit(EventDraft::default(), today, false, &palette).is_err());
    }
}
