//! Core library for eventdesk.
//!
//! This crate holds everything except presentation:
//! - `store` for the key-value storage backends
//! - `repository` for the event collection and its persistence
//! - `query` for search, date filtering and sorting
//! - `validation` for field-level checks on form input
//! - `theme`, `auth` and `debounce` for the smaller collaborators

pub mod auth;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod event;
pub mod query;
pub mod repository;
pub mod seed;
pub mod store;
pub mod theme;
pub mod validation;

pub use error::{AuthError, EventDeskError, EventDeskResult};
pub use event::Event;
pub use query::{DateFilter, Query, SortKey, query};
pub use repository::EventRepository;
pub use validation::{EventDraft, Field, ValidationErrors, validate};
