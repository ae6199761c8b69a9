use std::collections::HashSet;

use chrono::NaiveDate;
use eventdesk_core::constants::EVENTS_KEY;
use eventdesk_core::store::{FileStore, KeyValueStore};
use eventdesk_core::{DateFilter, EventDraft, EventRepository, Query, SortKey};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn draft(name: &str, date: &str) -> EventDraft {
    EventDraft {
        id: None,
        name: name.to_string(),
        email: "host@example.com".to_string(),
        date: date.to_string(),
        time: "19:00".to_string(),
        capacity: "40".to_string(),
        venue: "Community Hall".to_string(),
        description: "Bring a friend".to_string(),
    }
}

#[test]
fn seeded_collection_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let repo = EventRepository::load_at(FileStore::new(dir.path()), today()).unwrap();
    let seeded: HashSet<_> = repo.all().iter().map(|e| e.id.clone()).collect();
    assert_eq!(seeded.len(), 6);

    let reopened = EventRepository::load_at(FileStore::new(dir.path()), today()).unwrap();
    let reloaded: HashSet<_> = reopened.all().iter().map(|e| e.id.clone()).collect();
    assert_eq!(seeded, reloaded);
}

#[test]
fn form_flow_add_edit_duplicate_delete() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set(EVENTS_KEY, "[]").unwrap();
    let mut repo = EventRepository::load_at(store, today()).unwrap();

    let event = draft("Board Game Night", "2025-06-20").into_event(today()).unwrap();
    let added = repo.save(event).unwrap();

    let mut edit = EventDraft::from(&added);
    edit.capacity = "60".to_string();
    repo.save(edit.into_event(today()).unwrap()).unwrap();
    assert_eq!(repo.get(&added.id).unwrap().capacity, 60);

    let copy = repo.duplicate(&added.id).unwrap().unwrap();
    assert_eq!(copy.name, "Board Game Night (Copy)");

    repo.remove(&added.id).unwrap();

    let reopened = EventRepository::load_at(FileStore::new(dir.path()), today()).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.all()[0].id, copy.id);
    assert_eq!(reopened.all()[0].capacity, 60);
}

#[test]
fn corrupted_file_recovers_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("events_data_v1.json"), "[{\"id\": 1").unwrap();

    let mut repo = EventRepository::load_at(FileStore::new(dir.path()), today()).unwrap();
    assert!(repo.is_empty());

    repo.add(draft("Fresh Start", "2025-07-01").into_event(today()).unwrap())
        .unwrap();
    let reopened = EventRepository::load_at(FileStore::new(dir.path()), today()).unwrap();
    assert_eq!(reopened.len(), 1);
}

#[test]
fn query_over_reloaded_events() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set(EVENTS_KEY, "[]").unwrap();
    let mut repo = EventRepository::load_at(store, today()).unwrap();

    repo.add(draft("Tech Conference", "2025-09-01").into_event(today()).unwrap())
        .unwrap();
    repo.add(draft("Poetry Reading", "2025-08-01").into_event(today()).unwrap())
        .unwrap();

    let reopened = EventRepository::load_at(FileStore::new(dir.path()), today()).unwrap();

    let conf = reopened.query(&Query::new("conf", DateFilter::All, SortKey::None), today());
    assert_eq!(conf.len(), 1);
    assert_eq!(conf[0].name, "Tech Conference");

    let by_date = reopened.query(&Query::new("", DateFilter::Upcoming, SortKey::DateAsc), today());
    let names: Vec<_> = by_date.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Poetry Reading", "Tech Conference"]);

    // Seen from a later "today", both are in the past
    let later = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let past = reopened.query(&Query::new("", DateFilter::Past, SortKey::None), later);
    assert_eq!(past.len(), 2);
}
