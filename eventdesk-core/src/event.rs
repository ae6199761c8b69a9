//! Event records.
//!
//! An `Event` is the typed, validated form of a listing. Raw user input lives
//! in [`EventDraft`](crate::validation::EventDraft) until it passes validation.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{COPY_SUFFIX, EVENT_ID_PREFIX};

/// A single event listing.
///
/// Field names on disk follow the persisted blob layout (`email`, `desc`);
/// the long names are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(rename = "email", alias = "organizerEmail")]
    pub organizer_email: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    pub capacity: u32,
    pub venue: String,
    #[serde(
        rename = "desc",
        alias = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Event {
    /// Generate a fresh event id.
    pub fn new_id() -> String {
        format!("{}{}", EVENT_ID_PREFIX, uuid::Uuid::new_v4().simple())
    }

    /// Date and time combined into a single local instant (used for sorting).
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Lower-cased text searched by the free-text filter.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.venue,
            self.description.as_deref().unwrap_or_default(),
            self.organizer_email
        )
        .to_lowercase()
    }

    /// Copy of this event under a new id, with " (Copy)" appended to the name.
    pub fn duplicate(&self) -> Event {
        Event {
            id: Event::new_id(),
            name: format!("{}{}", self.name, COPY_SUFFIX),
            ..self.clone()
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Parse a 24h clock time, "HH:MM" or "HH:MM:SS".
pub(crate) fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Serde adapter storing times as "HH:MM".
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event() -> Event {
        Event {
            id: "ev_1".to_string(),
            name: "Annual Tech Conference".to_string(),
            organizer_email: "organizer@techconf.example".to_string(),
            date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            capacity: 500,
            venue: "Grand Convention Center".to_string(),
            description: Some("Talks about AI".to_string()),
        }
    }

    #[test]
    fn test_serializes_with_blob_field_names() {
        let json = serde_json::to_value(make_test_event()).unwrap();
        assert_eq!(json["email"], "organizer@techconf.example");
        assert_eq!(json["desc"], "Talks about AI");
        assert_eq!(json["date"], "2099-01-01");
        assert_eq!(json["time"], "09:00");
        assert!(json.get("organizer_email").is_none());
    }

    #[test]
    fn test_reads_long_field_names_and_seconds() {
        let json = r#"{
            "id": "ev_2",
            "name": "Music Festival",
            "organizerEmail": "events@musicfest.example",
            "date": "2099-02-03",
            "time": "14:00:00",
            "capacity": 2000,
            "venue": "Central Park Amphitheater"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.organizer_email, "events@musicfest.example");
        assert_eq!(event.time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_rejects_bad_time() {
        let json = r#"{"id":"x","name":"n","email":"a@b.c","date":"2099-01-01",
            "time":"noon","capacity":1,"venue":"v"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn test_duplicate_keeps_fields_except_id_and_name() {
        let original = make_test_event();
        let copy = original.duplicate();

        assert_ne!(copy.id, original.id);
        assert!(copy.id.starts_with("ev_"));
        assert_eq!(copy.name, "Annual Tech Conference (Copy)");
        assert_eq!(
            Event {
                id: original.id.clone(),
                name: original.name.clone(),
                ..copy
            },
            original
        );
    }

    #[test]
    fn test_search_text_includes_all_fields() {
        let text = make_test_event().search_text();
        assert!(text.contains("annual tech conference"));
        assert!(text.contains("grand convention center"));
        assert!(text.contains("talks about ai"));
        assert!(text.contains("organizer@techconf.example"));
    }
}
