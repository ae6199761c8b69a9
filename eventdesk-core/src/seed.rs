//! Sample events written on first run.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::event::Event;

struct SeedEvent {
    name: &'static str,
    email: &'static str,
    days_ahead: i64,
    hour: u32,
    minute: u32,
    capacity: u32,
    venue: &'static str,
    description: &'static str,
}

const SEED_EVENTS: [SeedEvent; 6] = [
    SeedEvent {
        name: "Annual Tech Conference 2025",
        email: "organizer@techconf.example",
        days_ahead: 5,
        hour: 9,
        minute: 0,
        capacity: 500,
        venue: "Grand Convention Center",
        description: "Join us for the biggest tech conference of the year featuring AI, Web3, and Cloud Computing talks",
    },
    SeedEvent {
        name: "Music Festival",
        email: "events@musicfest.example",
        days_ahead: 15,
        hour: 14,
        minute: 0,
        capacity: 2000,
        venue: "Central Park Amphitheater",
        description: "A day of live music featuring local and international artists across multiple genres",
    },
    SeedEvent {
        name: "Startup Networking Mixer",
        email: "community@startup.example",
        days_ahead: 3,
        hour: 18,
        minute: 30,
        capacity: 150,
        venue: "Innovation Hub",
        description: "Connect with fellow entrepreneurs, investors, and tech enthusiasts over drinks and discussions",
    },
    SeedEvent {
        name: "Art Exhibition: Digital Dreams",
        email: "gallery@arts.example",
        days_ahead: 7,
        hour: 11,
        minute: 0,
        capacity: 200,
        venue: "Modern Art Gallery",
        description: "An immersive exhibition featuring digital art, NFTs, and interactive installations",
    },
    SeedEvent {
        name: "Wellness Workshop",
        email: "info@wellness.example",
        days_ahead: 10,
        hour: 8,
        minute: 30,
        capacity: 50,
        venue: "Zen Garden Studio",
        description: "A morning of yoga, meditation, and mindfulness practices for busy professionals",
    },
    SeedEvent {
        name: "Food & Wine Festival",
        email: "taste@foodfest.example",
        days_ahead: 20,
        hour: 12,
        minute: 0,
        capacity: 1000,
        venue: "Riverfront Plaza",
        description: "Sample cuisine from top local restaurants and wineries while enjoying live entertainment",
    },
];

/// The first-run sample set, dated relative to `today`.
pub fn seed_events(today: NaiveDate) -> Vec<Event> {
    SEED_EVENTS
        .iter()
        .map(|seed| Event {
            id: Event::new_id(),
            name: seed.name.to_string(),
            organizer_email: seed.email.to_string(),
            date: today + Duration::days(seed.days_ahead),
            time: NaiveTime::from_hms_opt(seed.hour, seed.minute, 0).unwrap_or_default(),
            capacity: seed.capacity,
            venue: seed.venue.to_string(),
            description: Some(seed.description.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::EventDraft;
    use std::collections::HashSet;

    #[test]
    fn test_seed_events_are_valid_and_upcoming() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let events = seed_events(today);

        assert_eq!(events.len(), 6);
        for event in &events {
            assert!(event.date > today);
            assert!(EventDraft::from(event).validate(today).is_empty(), "{}", event);
        }

        let ids: HashSet<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_seed_offsets() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let events = seed_events(today);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(events[5].date, NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
        assert_eq!(events[2].time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    }
}
