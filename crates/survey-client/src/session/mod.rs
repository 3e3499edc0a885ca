//! Session helpers
//!
//! A session is three independent keys in a [`SessionStorage`]: the user id
//! (also read by [`crate::ApiClient`] for the `X-User-ID` header), the cached
//! user profile as JSON, and the auth token. Nothing enforces consistency
//! between them; a profile that is not JSON at all ends the session.

use std::fmt::Debug;
use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::models::{LoginResponse, User};

#[cfg(target_arch = "wasm32")]
mod browser;
mod error;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod storage;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserNavigator, BrowserStorage};
pub use error::Error;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
pub use storage::{MemoryStorage, SessionStorage, UnavailableStorage};

/// Storage key holding the user id
pub const USER_ID_KEY: &str = "userId";
/// Storage key holding the JSON encoded [`User`]
pub const USER_KEY: &str = "user";
/// Storage key holding the auth token
pub const TOKEN_KEY: &str = "token";
/// Every key belonging to a session
pub const SESSION_KEYS: [&str; 3] = [USER_KEY, USER_ID_KEY, TOKEN_KEY];

/// Route logout sends the user to
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Moves the active view somewhere else
pub trait Navigator: Send + Sync + Debug {
    /// Switch to `route`
    fn redirect(&self, route: &str);
}

/// Reads and clears the session held in a [`SessionStorage`]
#[derive(Debug, Clone)]
pub struct SessionManager {
    storage: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl SessionManager {
    /// Manager over `storage`, redirecting through `navigator`
    pub fn new(storage: Arc<dyn SessionStorage>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            storage,
            navigator,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }

    /// Use `route` instead of [`DEFAULT_LOGIN_ROUTE`]
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Route used for redirects
    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Underlying storage
    pub fn storage(&self) -> &Arc<dyn SessionStorage> {
        &self.storage
    }

    /// Non-empty value stored under `key`; read failures count as absent
    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(Error::Unavailable) => None,
            Err(err) => {
                tracing::warn!("Could not read session key {}: {}", key, err);
                None
            }
        }
    }

    /// `true` when both a token and a user profile are stored
    ///
    /// An empty string under either key counts as absent, the same as a
    /// missing key. The profile's content is not checked.
    pub fn is_authenticated(&self) -> bool {
        if !self.storage.is_available() {
            return false;
        }

        self.read(TOKEN_KEY).is_some() && self.read(USER_KEY).is_some()
    }

    /// Stored user id
    pub fn user_id(&self) -> Option<String> {
        if !self.storage.is_available() {
            return None;
        }

        self.read(USER_ID_KEY)
    }

    /// Cached user profile
    ///
    /// A stored value that is not JSON ends the session: every session key is
    /// removed, the view is sent to the login route, and `None` is returned.
    /// JSON `null`, or JSON that is not shaped like a profile, is `None` and
    /// leaves the session alone.
    #[instrument(skip(self))]
    pub fn current_user(&self) -> Option<User> {
        if !self.storage.is_available() {
            return None;
        }

        let raw = self.read(USER_KEY)?;

        let value = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Stored user profile is not JSON, logging out: {}", err);
                self.logout();
                return None;
            }
        };

        if value.is_null() {
            return None;
        }

        match serde_json::from_value::<User>(value) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!("Stored user profile has an unexpected shape: {}", err);
                None
            }
        }
    }

    /// Remove every session key and go to the login route
    ///
    /// Does nothing, including not redirecting, when storage is unavailable.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        if !self.storage.is_available() {
            return;
        }

        for key in SESSION_KEYS {
            match self.storage.remove_item(key) {
                Ok(()) => {}
                Err(Error::Unavailable) => return,
                Err(err) => tracing::warn!("Could not remove session key {}: {}", key, err),
            }
        }

        tracing::info!("Session cleared");
        self.navigator.redirect(&self.login_route);
    }

    /// Store a session for `user`
    ///
    /// The token key is only written when `token` is given; without it the
    /// session identifies the user but [`Self::is_authenticated`] stays false.
    #[instrument(skip_all, fields(user_id = user.id))]
    pub fn save(&self, user: &User, token: Option<&str>) -> Result<(), Error> {
        self.storage.set_item(USER_ID_KEY, &user.id.to_string())?;
        self.storage.set_item(USER_KEY, &serde_json::to_string(user)?)?;

        match token {
            Some(token) => self.storage.set_item(TOKEN_KEY, token)?,
            None => self.storage.remove_item(TOKEN_KEY)?,
        }

        tracing::info!("Session stored");
        Ok(())
    }

    /// Store the session described by a login answer
    pub fn save_login(&self, login: &LoginResponse) -> Result<(), Error> {
        self.save(login.user(), login.token())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::models::Role;

    #[derive(Debug, Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn routes(&self) -> Vec<String> {
            self.routes.lock().expect("lock").clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, route: &str) {
            self.routes.lock().expect("lock").push(route.to_string());
        }
    }

    fn manager(storage: Arc<dyn SessionStorage>) -> (SessionManager, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        (SessionManager::new(storage, navigator.clone()), navigator)
    }

    #[test]
    fn test_is_authenticated_truth_table() {
        for (token, user, expected) in [
            (None, None, false),
            (Some("t"), None, false),
            (None, Some("{}"), false),
            (Some("t"), Some("{}"), true),
            (Some("t"), Some("garbage"), true),
            (Some(""), Some("{}"), false),
            (Some("t"), Some(""), false),
        ] {
            let storage = MemoryStorage::new();
            if let Some(token) = token {
                storage.set_item(TOKEN_KEY, token).expect("set");
            }
            if let Some(user) = user {
                storage.set_item(USER_KEY, user).expect("set");
            }

            let (session, _) = manager(Arc::new(storage));
            assert_eq!(
                session.is_authenticated(),
                expected,
                "token={token:?} user={user:?}"
            );
        }
    }

    #[test]
    fn test_unavailable_storage_is_logged_out_and_silent() {
        let (session, navigator) = manager(Arc::new(UnavailableStorage));

        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);
        assert_eq!(session.user_id(), None);

        session.logout();
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_current_user_decodes_profile() {
        let storage = Arc::new(MemoryStorage::with_items([(
            USER_KEY,
            r#"{"id": 9, "email": "p@x.io", "role": "professor"}"#,
        )]));
        let (session, navigator) = manager(storage);

        let user = session.current_user().expect("profile present");
        assert_eq!(user.id, 9);
        assert_eq!(user.role, Role::Professor);
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_current_user_missing_is_none_without_logout() {
        let storage = Arc::new(MemoryStorage::with_items([(TOKEN_KEY, "t")]));
        let (session, navigator) = manager(storage.clone());

        assert_eq!(session.current_user(), None);
        assert_eq!(storage.len(), 1);
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_corrupt_profile_ends_session() {
        let storage = Arc::new(MemoryStorage::with_items([
            (USER_KEY, "{not json"),
            (USER_ID_KEY, "3"),
            (TOKEN_KEY, "t"),
        ]));
        let (session, navigator) = manager(storage.clone());

        assert_eq!(session.current_user(), None);
        assert!(storage.is_empty());
        assert_eq!(navigator.routes(), vec![DEFAULT_LOGIN_ROUTE.to_string()]);
    }

    #[test]
    fn test_mistyped_profile_keeps_session() {
        for profile in ["null", r#"{"id": "12"}"#, "[1, 2]"] {
            let storage = Arc::new(MemoryStorage::with_items([
                (USER_KEY, profile),
                (USER_ID_KEY, "12"),
                (TOKEN_KEY, "t"),
            ]));
            let (session, navigator) = manager(storage.clone());

            assert_eq!(session.current_user(), None, "{profile}");
            assert_eq!(storage.len(), 3, "{profile}");
            assert!(navigator.routes().is_empty(), "{profile}");
            assert!(session.is_authenticated());
        }
    }

    #[test]
    fn test_logout_clears_and_redirects_to_custom_route() {
        let storage = Arc::new(MemoryStorage::with_items([
            (USER_KEY, "{}"),
            (USER_ID_KEY, "3"),
            (TOKEN_KEY, "t"),
            ("theme", "dark"),
        ]));
        let (session, navigator) = manager(storage.clone());
        let session = session.with_login_route("/auth/login");

        session.logout();

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get_item("theme").expect("get"), Some("dark".to_string()));
        assert_eq!(navigator.routes(), vec!["/auth/login".to_string()]);
    }

    #[test]
    fn test_save_login_writes_all_keys() {
        let storage = Arc::new(MemoryStorage::new());
        let (session, _) = manager(storage.clone());

        let login = LoginResponse::Session {
            token: "jwt".to_string(),
            user: User {
                id: 12,
                email: "s@x.io".to_string(),
                ..Default::default()
            },
        };
        session.save_login(&login).expect("saved");

        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), Some("12".to_string()));
        assert_eq!(session.current_user(), Some(login.user().clone()));
        assert_eq!(storage.get_item(TOKEN_KEY).expect("get"), Some("jwt".to_string()));
    }

    #[test]
    fn test_save_without_token_drops_stale_token() {
        let storage = Arc::new(MemoryStorage::with_items([(TOKEN_KEY, "old")]));
        let (session, _) = manager(storage.clone());

        session.save(&User::default(), None).expect("saved");

        assert_eq!(storage.get_item(TOKEN_KEY).expect("get"), None);
        assert_eq!(session.user_id(), Some("0".to_string()));
        assert!(!session.is_authenticated());
    }
}
