//! Storage keys and defaults shared across eventdesk.

/// Key holding the JSON array of event records.
pub const EVENTS_KEY: &str = "events_data_v1";

/// Key holding the JSON object of registered users.
pub const USERS_KEY: &str = "users_db_v1";

/// Key holding the username of the logged-in user.
pub const CURRENT_USER_KEY: &str = "auth_current_v1";

/// Key holding the saved theme choice.
pub const THEME_KEY: &str = "eventify_theme";

/// Quiescence window for free-text search input, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Appended to the name of a duplicated event.
pub const COPY_SUFFIX: &str = " (Copy)";

pub(crate) const EVENT_ID_PREFIX: &str = "ev_";
