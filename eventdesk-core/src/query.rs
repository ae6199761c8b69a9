//! Filter and sort pipeline over the event collection.
//!
//! The date filter compares calendar dates only, while date sorting uses the
//! combined date and time, so an event that started earlier today still
//! counts as upcoming.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

use crate::event::Event;

/// Which events to keep relative to today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    /// Dated today or later.
    Upcoming,
    /// Dated before today.
    Past,
}

impl DateFilter {
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Upcoming => event.date >= today,
            DateFilter::Past => event.date < today,
        }
    }
}

impl FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(DateFilter::All),
            "upcoming" => Ok(DateFilter::Upcoming),
            "past" => Ok(DateFilter::Past),
            other => Err(format!(
                "Invalid date filter '{}'. Expected all, upcoming or past",
                other
            )),
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DateFilter::All => "all",
            DateFilter::Upcoming => "upcoming",
            DateFilter::Past => "past",
        })
    }
}

/// Ordering applied after filtering. Ties keep their input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    None,
    DateAsc,
    DateDesc,
    NameAsc,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortKey::None),
            "dateAsc" | "date-asc" => Ok(SortKey::DateAsc),
            "dateDesc" | "date-desc" => Ok(SortKey::DateDesc),
            "nameAsc" | "name-asc" => Ok(SortKey::NameAsc),
            other => Err(format!(
                "Invalid sort key '{}'. Expected none, date-asc, date-desc or name-asc",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SortKey::None => "none",
            SortKey::DateAsc => "dateAsc",
            SortKey::DateDesc => "dateDesc",
            SortKey::NameAsc => "nameAsc",
        })
    }
}

/// The current search text, date filter and sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub date_filter: DateFilter,
    pub sort: SortKey,
}

impl Query {
    pub fn new(text: impl Into<String>, date_filter: DateFilter, sort: SortKey) -> Self {
        Query {
            text: text.into(),
            date_filter,
            sort,
        }
    }

    pub fn run<'a>(&self, events: &'a [Event], today: NaiveDate) -> Vec<&'a Event> {
        query(events, &self.text, self.date_filter, self.sort, today)
    }
}

/// Filter `events` by text and date, then sort.
pub fn query<'a>(
    events: &'a [Event],
    text: &str,
    date_filter: DateFilter,
    sort: SortKey,
    today: NaiveDate,
) -> Vec<&'a Event> {
    let needle = text.trim().to_lowercase();

    let mut list: Vec<&Event> = events
        .iter()
        .filter(|event| needle.is_empty() || event.search_text().contains(&needle))
        .filter(|event| date_filter.matches(event, today))
        .collect();

    match sort {
        SortKey::None => {}
        SortKey::DateAsc => list.sort_by_key(|event| event.starts_at()),
        SortKey::DateDesc => list.sort_by(|a, b| b.starts_at().cmp(&a.starts_at())),
        SortKey::NameAsc => list.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
    }

    list
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties between otherwise equal names.
static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);

    Collator::try_new(Default::default(), options)
        .inspect_err(|e| tracing::warn!(error = %e, "no collation data, sorting names by code point"))
        .ok()
});

fn locale_cmp(a: &str, b: &str) -> Ordering {
    match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
