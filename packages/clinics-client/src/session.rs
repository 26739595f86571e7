//! Session state for one running client.
//!
//! Holds the authenticated identity in memory and the bearer token in a
//! tab-scoped storage collaborator. The two move together: both are set by
//! a successful login and both are cleared by logout. Nothing here touches
//! the network; the login call itself lives on [`crate::ClinicsClient`].

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::{Role, UserData};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "my_app_token";

/// Tab-scoped key-value storage for the token.
///
/// The in-memory implementation is the default; the trait seam exists so an
/// embedder can back the session with real browser storage.
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Remove every entry, not just the token.
    fn clear(&self);
}

/// In-memory storage, scoped to the life of the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.entries.lock().expect("storage lock poisoned").clear();
    }
}

/// Current authenticated identity and bearer token.
///
/// Starts empty; populated by a successful login response; destroyed by an
/// explicit logout or by the response pipeline on a 401.
pub struct Session {
    user: RwLock<Option<UserData>>,
    storage: Box<dyn TokenStorage>,
}

impl Session {
    pub fn new(storage: Box<dyn TokenStorage>) -> Self {
        Self {
            user: RwLock::new(None),
            storage,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Store the identity and the token extracted from the login response's
    /// `Authorization` header. On a missing or malformed header nothing is
    /// stored and the login attempt fails.
    pub fn establish(&self, authorization: Option<&str>, user: UserData) -> Result<()> {
        let header = authorization
            .ok_or_else(|| ClientError::Auth("authorization header missing".to_string()))?;
        let token = parse_bearer(header)?;

        self.storage.set(TOKEN_KEY, &token);
        *self.user.write().expect("session lock poisoned") = Some(user);

        debug!("session established");
        Ok(())
    }

    /// Clear the storage and the in-memory identity. Idempotent.
    pub fn logout(&self) {
        self.storage.clear();
        *self.user.write().expect("session lock poisoned") = None;
        debug!("session cleared");
    }

    pub fn is_logged(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role(), Some(Role::Admin))
    }

    /// Clinical staff check: the account is a physician or an admin.
    pub fn has_credentials(&self) -> bool {
        matches!(self.role(), Some(Role::Admin) | Some(Role::Physician))
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn user(&self) -> Option<UserData> {
        self.user.read().expect("session lock poisoned").clone()
    }

    fn role(&self) -> Option<Role> {
        self.user.read().expect("session lock poisoned").as_ref().map(|u| u.role)
    }
}

/// Extract the token from a raw `Authorization` header value.
///
/// The service wraps the value in quotes and prefixes the scheme, so
/// `"Bearer abc"` becomes `abc`.
fn parse_bearer(header: &str) -> Result<String> {
    let trimmed = header.trim_matches('"');
    trimmed
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| ClientError::Auth(format!("unable to parse token from {header:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::user_with_role;

    #[test]
    fn empty_session_denies_everything() {
        let session = Session::in_memory();

        assert!(!session.is_logged());
        assert!(!session.is_admin());
        assert!(!session.has_credentials());
        assert!(session.token().is_none());
    }

    #[test]
    fn establish_sets_user_and_token_together() {
        let session = Session::in_memory();
        session
            .establish(Some("Bearer abc123"), user_with_role(Role::Admin))
            .unwrap();

        assert!(session.is_logged());
        assert_eq!(session.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn admin_has_credentials() {
        let session = Session::in_memory();
        session
            .establish(Some("Bearer t"), user_with_role(Role::Admin))
            .unwrap();

        assert!(session.is_admin());
        assert!(session.has_credentials());
    }

    #[test]
    fn physician_has_credentials_but_is_not_admin() {
        let session = Session::in_memory();
        session
            .establish(Some("Bearer t"), user_with_role(Role::Physician))
            .unwrap();

        assert!(!session.is_admin());
        assert!(session.has_credentials());
    }

    #[test]
    fn patient_has_no_credentials() {
        let session = Session::in_memory();
        session
            .establish(Some("Bearer t"), user_with_role(Role::Patient))
            .unwrap();

        assert!(session.is_logged());
        assert!(!session.is_admin());
        assert!(!session.has_credentials());
    }

    #[test]
    fn logout_is_idempotent() {
        let session = Session::in_memory();
        session
            .establish(Some("Bearer t"), user_with_role(Role::Admin))
            .unwrap();

        session.logout();
        assert!(!session.is_logged());
        assert!(session.token().is_none());

        // A second logout on an already-empty session is fine
        session.logout();
        assert!(!session.is_logged());
    }

    #[test]
    fn missing_header_fails_and_stores_nothing() {
        let session = Session::in_memory();
        let err = session
            .establish(None, user_with_role(Role::Patient))
            .unwrap_err();

        assert!(matches!(err, ClientError::Auth(_)));
        assert!(!session.is_logged());
        assert!(session.token().is_none());
    }

    #[test]
    fn schemeless_header_fails() {
        let session = Session::in_memory();
        let err = session
            .establish(Some("abc123"), user_with_role(Role::Patient))
            .unwrap_err();

        assert!(matches!(err, ClientError::Auth(_)));
        assert!(!session.is_logged());
    }

    #[test]
    fn parse_bearer_strips_quotes_and_scheme() {
        assert_eq!(parse_bearer("Bearer abc").unwrap(), "abc");
        assert_eq!(parse_bearer("\"Bearer abc\"").unwrap(), "abc");
        assert!(parse_bearer("abc").is_err());
        assert!(parse_bearer("").is_err());
    }
}
