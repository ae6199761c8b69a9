//! Local demo accounts.
//!
//! Passwords are stored with a reversible encoding (base64, reversed). This
//! only keeps them from being readable at a glance; it is not hashing and
//! offers no protection. Accounts gate nothing more than the "add event"
//! command.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::constants::{CURRENT_USER_KEY, USERS_KEY};
use crate::error::{AuthError, EventDeskError, EventDeskResult};
use crate::store::{KeyValueStore, read_json, write_json};

/// A stored account, keyed by normalized username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub pass: String,
}

/// An account without its encoded password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(user: &UserRecord) -> Self {
        UserProfile {
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

type Users = BTreeMap<String, UserRecord>;

pub fn encode_password(password: &str) -> String {
    STANDARD.encode(password).chars().rev().collect()
}

fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

fn load_users<S: KeyValueStore + ?Sized>(store: &S) -> EventDeskResult<Users> {
    match read_json::<Users, S>(store, USERS_KEY) {
        Ok(users) => Ok(users.unwrap_or_default()),
        Err(EventDeskError::Serialization(e)) => {
            tracing::warn!(error = %e, "stored users are malformed, treating as empty");
            Ok(Users::new())
        }
        Err(e) => Err(e),
    }
}

fn set_current<S: KeyValueStore + ?Sized>(store: &mut S, username: &str) -> EventDeskResult<()> {
    write_json(store, CURRENT_USER_KEY, username)
}

/// Create an account and log it in.
pub fn register<S: KeyValueStore + ?Sized>(
    store: &mut S,
    username: &str,
    email: &str,
    password: &str,
) -> EventDeskResult<UserProfile> {
    let username = normalize_username(username);
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields.into());
    }

    let mut users = load_users(store)?;
    if users.contains_key(&username) {
        return Err(AuthError::UsernameTaken.into());
    }
    if users.values().any(|u| u.email == email) {
        return Err(AuthError::EmailInUse.into());
    }

    let record = UserRecord {
        username: username.clone(),
        email: email.to_string(),
        pass: encode_password(password),
    };
    let profile = UserProfile::from(&record);
    users.insert(username.clone(), record);

    write_json(store, USERS_KEY, &users)?;
    set_current(store, &username)?;
    tracing::info!(username = %username, "registered user");

    Ok(profile)
}

pub fn login<S: KeyValueStore + ?Sized>(
    store: &mut S,
    username: &str,
    password: &str,
) -> EventDeskResult<UserProfile> {
    let username = normalize_username(username);
    let users = load_users(store)?;

    let user = users
        .get(&username)
        .filter(|u| u.pass == encode_password(password))
        .ok_or(AuthError::InvalidCredentials)?;

    set_current(store, &username)?;
    Ok(UserProfile::from(user))
}

pub fn logout<S: KeyValueStore + ?Sized>(store: &mut S) -> EventDeskResult<()> {
    store.remove(CURRENT_USER_KEY)
}

/// The logged-in user, if the stored username still has an account.
pub fn current_user<S: KeyValueStore + ?Sized>(store: &S) -> EventDeskResult<Option<UserProfile>> {
    let Some(raw) = store.get(CURRENT_USER_KEY)? else {
        return Ok(None);
    };

    // Accept a bare username as well as a JSON string
    let username = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    if username.is_empty() {
        return Ok(None);
    }

    let users = load_users(store)?;
    Ok(users.get(&username).map(UserProfile::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn auth_err(result: EventDeskResult<UserProfile>) -> AuthError {
        match result {
            Err(EventDeskError::Auth(e)) => e,
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn test_encoding_is_reversed_base64() {
        assert_eq!(encode_password("secret"), "0VmcjV2c");
    }

    #[test]
    fn test_register_normalizes_and_logs_in() {
        let mut store = MemoryStore::new();
        let profile = register(&mut store, "  Alice ", " alice@example.com ", "pw").unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@example.com");

        assert_eq!(current_user(&store).unwrap(), Some(profile));
        assert_eq!(store.get(CURRENT_USER_KEY).unwrap().as_deref(), Some("\"alice\""));

        let users: Users = read_json(&store, USERS_KEY).unwrap().unwrap();
        assert_eq!(users["alice"].pass, encode_password("pw"));
    }

    #[test]
    fn test_register_rejects_duplicates_and_missing_fields() {
        let mut store = MemoryStore::new();
        register(&mut store, "alice", "alice@example.com", "pw").unwrap();

        assert_eq!(
            auth_err(register(&mut store, "ALICE", "other@example.com", "pw")),
            AuthError::UsernameTaken
        );
        assert_eq!(
            auth_err(register(&mut store, "bob", "alice@example.com", "pw")),
            AuthError::EmailInUse
        );
        assert_eq!(
            auth_err(register(&mut store, "bob", "bob@example.com", "")),
            AuthError::MissingFields
        );
    }

    #[test]
    fn test_login_and_logout() {
        let mut store = MemoryStore::new();
        register(&mut store, "alice", "alice@example.com", "pw").unwrap();
        logout(&mut store).unwrap();
        assert_eq!(current_user(&store).unwrap(), None);

        assert_eq!(
            auth_err(login(&mut store, "alice", "wrong")),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            auth_err(login(&mut store, "nobody", "pw")),
            AuthError::InvalidCredentials
        );
        assert_eq!(current_user(&store).unwrap(), None);

        let profile = login(&mut store, " Alice", "pw").unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(current_user(&store).unwrap().unwrap().username, "alice");
    }

    #[test]
    fn test_current_user_accepts_bare_username() {
        let mut store = MemoryStore::new();
        register(&mut store, "alice", "alice@example.com", "pw").unwrap();
        store.set(CURRENT_USER_KEY, "alice").unwrap();
        assert!(current_user(&store).unwrap().is_some());

        store.set(CURRENT_USER_KEY, "ghost").unwrap();
        assert_eq!(current_user(&store).unwrap(), None);
    }

    #[test]
    fn test_malformed_users_read_as_empty() {
        let mut store = MemoryStore::new();
        store.set(USERS_KEY, "not json").unwrap();
        assert!(register(&mut store, "alice", "alice@example.com", "pw").is_ok());
    }
}
