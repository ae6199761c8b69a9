//! The event collection and its persistence.
//!
//! The whole collection is stored as one JSON array under
//! [`EVENTS_KEY`]. Every mutation rewrites that blob; if the write fails the
//! in-memory collection is rolled back so the two never diverge.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};

use crate::constants::EVENTS_KEY;
use crate::error::EventDeskResult;
use crate::event::Event;
use crate::query::Query;
use crate::seed::seed_events;
use crate::store::{KeyValueStore, write_json};

pub struct EventRepository<S: KeyValueStore> {
    store: S,
    events: Vec<Event>,
}

impl<S: KeyValueStore> EventRepository<S> {
    /// Load the collection, seeding sample events on first run.
    pub fn load(store: S) -> EventDeskResult<Self> {
        Self::load_at(store, Local::now().date_naive())
    }

    /// Like [`load`](Self::load), with seed dates offset from `today`.
    ///
    /// A blob that fails to parse yields an empty collection. The blob itself
    /// is left untouched until the next mutation overwrites it.
    pub fn load_at(store: S, today: NaiveDate) -> EventDeskResult<Self> {
        let raw = store.get(EVENTS_KEY)?;

        let mut repo = EventRepository {
            store,
            events: Vec::new(),
        };

        match raw {
            None => {
                tracing::info!("no stored events, writing sample set");
                repo.events = seed_events(today);
                repo.persist()?;
            }
            Some(raw) => match serde_json::from_str::<Vec<Event>>(&raw) {
                Ok(events) => repo.events = dedupe_ids(events),
                Err(e) => {
                    tracing::warn!(error = %e, "stored events are malformed, starting empty");
                }
            },
        }

        Ok(repo)
    }

    /// The current collection, in insertion order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Append an event. An empty or already used id is replaced with a fresh one.
    pub fn add(&mut self, mut event: Event) -> EventDeskResult<Event> {
        if event.id.is_empty() || self.get(&event.id).is_some() {
            event.id = Event::new_id();
        }

        let added = event.clone();
        self.mutate(|events| events.push(event))?;
        tracing::debug!(id = %added.id, "added event");
        Ok(added)
    }

    /// Replace the event with `id`. Returns false (and writes nothing) when absent.
    pub fn update(&mut self, id: &str, mut event: Event) -> EventDeskResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        event.id = id.to_string();
        self.mutate(|events| events[index] = event)?;
        tracing::debug!(id, "updated event");
        Ok(true)
    }

    /// Update when the id is known, add otherwise.
    pub fn save(&mut self, event: Event) -> EventDeskResult<Event> {
        let id = event.id.clone();
        if self.update(&id, event.clone())? {
            Ok(event)
        } else {
            self.add(event)
        }
    }

    /// Delete the event with `id`, returning it. No-op when absent.
    pub fn remove(&mut self, id: &str) -> EventDeskResult<Option<Event>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let removed = self.mutate(|events| events.remove(index))?;
        tracing::debug!(id, "removed event");
        Ok(Some(removed))
    }

    /// Append a copy of the event with `id` under a new id. No-op when absent.
    pub fn duplicate(&mut self, id: &str) -> EventDeskResult<Option<Event>> {
        let Some(copy) = self.get(id).map(Event::duplicate) else {
            return Ok(None);
        };

        let added = copy.clone();
        self.mutate(|events| events.push(copy))?;
        tracing::debug!(from = id, id = %added.id, "duplicated event");
        Ok(Some(added))
    }

    /// Run `query` over the collection.
    pub fn query(&self, query: &Query, today: NaiveDate) -> Vec<&Event> {
        query.run(&self.events, today)
    }

    /// Size in bytes of the stored blob.
    pub fn storage_usage(&self) -> EventDeskResult<usize> {
        Ok(self.store.get(EVENTS_KEY)?.map(|raw| raw.len()).unwrap_or(0))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    fn persist(&mut self) -> EventDeskResult<()> {
        write_json(&mut self.store, EVENTS_KEY, &self.events)
    }

    /// Apply `change` and persist, restoring the previous collection on failure.
    fn mutate<T>(&mut self, change: impl FnOnce(&mut Vec<Event>) -> T) -> EventDeskResult<T> {
        let previous = self.events.clone();
        let out = change(&mut self.events);

        if let Err(e) = self.persist() {
            tracing::error!(error = %e, "failed to persist events, change discarded");
            self.events = previous;
            return Err(e);
        }

        Ok(out)
    }
}

/// Give any repeated id a fresh one so lookups by id stay unambiguous.
fn dedupe_ids(mut events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    for event in &mut events {
        if !seen.insert(event.id.clone()) || event.id.is_empty() {
            tracing::warn!(id = %event.id, name = %event.name, "duplicate event id, reassigning");
            event.id = Event::new_id();
            seen.insert(event.id.clone());
        }
    }
    events
}
