//! Session store: the current bearer token, the logged-in user, and the
//! token lifecycle around them.
//!
//! A [`SessionStore`] is an explicit context object. Callers share it through
//! an `Arc` and hand it to the HTTP client; there is no global instance.
//! Every mutation is mirrored to a [`SessionStorage`] backend so the session
//! survives restarts.

use std::sync::{Arc, Mutex, MutexGuard};

use arc_swap::ArcSwap;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::SessionStorage;
use crate::token::token_ttl;
use crate::user::UserProfile;
use crate::CoreResult;

/// Storage key for the raw token string
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key for the serialized user profile
pub const USER_KEY: &str = "current_user";

/// Snapshot of the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Asks the identity provider whether a token is still accepted
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// `Ok(false)` means the provider rejected the token; `Err` means it
    /// could not be asked.
    async fn validate_token(&self, token: &str) -> CoreResult<bool>;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Holds the session and keeps persistent storage in sync with it
pub struct SessionStore {
    state: ArcSwap<SessionState>,
    // Held across the storage write and the swap so the two stay in step
    write_lock: Mutex<()>,
    storage: Box<dyn SessionStorage>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.load();
        f.debug_struct("SessionStore")
            .field("has_token", &state.token.is_some())
            .field("user", &state.user.as_ref().map(|u| &u.id))
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an empty store over `storage`. Nothing is read until one of
    /// the `load_*` methods is called.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            state: ArcSwap::from_pointee(SessionState::default()),
            write_lock: Mutex::new(()),
            storage: Box::new(storage),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a store and rehydrate token and user from `storage`
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        let store = Self::new(storage);
        store.load_token_from_storage();
        store.load_user_from_storage();
        store
    }

    /// Replace the clock used for expiry checks
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Snapshot of the whole session
    pub fn session(&self) -> SessionState {
        (**self.state.load()).clone()
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.state.load().token.clone()
    }

    /// Current user, if any
    pub fn user(&self) -> Option<UserProfile> {
        self.state.load().user.clone()
    }

    /// Remaining validity of the current token; zero when absent or malformed
    pub fn token_ttl(&self) -> Duration {
        let state = self.state.load();
        token_ttl(state.token.as_deref(), self.clock.now())
    }

    /// Whether the session holds a token that is unexpired and accepted by
    /// the identity provider.
    ///
    /// An expired token is dropped without asking the provider. A token the
    /// provider rejects, or cannot be asked about, is dropped as well; the
    /// underlying error is logged, not returned.
    pub async fn is_authenticated(&self, validator: &dyn TokenValidator) -> bool {
        let Some(token) = self.token() else {
            return false;
        };

        if token_ttl(Some(&token), self.clock.now()) <= Duration::zero() {
            debug!("Session token expired, clearing session");
            self.clear_session_if_token(&token);
            return false;
        }

        match validator.validate_token(&token).await {
            Ok(true) => true,
            Ok(false) => {
                warn!("Session token rejected by identity provider, clearing session");
                self.clear_session_if_token(&token);
                false
            }
            Err(e) => {
                warn!(error = %e, "Session token could not be validated, clearing session");
                self.clear_session_if_token(&token);
                false
            }
        }
    }

    /// Store a new token in memory and in storage
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let _guard = self.write_guard();
        self.persist(TOKEN_KEY, Some(&token));
        self.update(|state| SessionState {
            token: Some(token),
            user: state.user.clone(),
        });
    }

    /// Drop the token from memory and storage, keeping the user
    pub fn clear_token(&self) {
        let _guard = self.write_guard();
        self.persist(TOKEN_KEY, None);
        self.update(|state| SessionState {
            token: None,
            user: state.user.clone(),
        });
    }

    /// Store the logged-in user in memory and in storage
    pub fn set_user(&self, user: UserProfile) {
        let _guard = self.write_guard();
        match serde_json::to_string(&user) {
            Ok(serialized) => self.persist(USER_KEY, Some(&serialized)),
            Err(e) => warn!(error = %e, "Failed to serialize user for storage"),
        }
        self.update(|state| SessionState {
            token: state.token.clone(),
            user: Some(user),
        });
    }

    /// Log out: drop both user and token from memory and storage
    pub fn clear_user(&self) {
        let _guard = self.write_guard();
        self.persist(USER_KEY, None);
        self.persist(TOKEN_KEY, None);
        self.state.store(Arc::new(SessionState::default()));
    }

    /// Rehydrate the token from storage. Returns the loaded token.
    pub fn load_token_from_storage(&self) -> Option<String> {
        let _guard = self.write_guard();
        let token = match self.storage.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read token from storage");
                None
            }
        };

        self.update(|state| SessionState {
            token: token.clone(),
            user: state.user.clone(),
        });
        token
    }

    /// Rehydrate the user from storage. Malformed data is logged and
    /// discarded. Returns the loaded user.
    pub fn load_user_from_storage(&self) -> Option<UserProfile> {
        let _guard = self.write_guard();
        let user = match self.storage.get_item(USER_KEY) {
            Ok(Some(data)) => match serde_json::from_str::<UserProfile>(&data) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Failed to parse user data from storage");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read user data from storage");
                None
            }
        };

        self.update(|state| SessionState {
            token: state.token.clone(),
            user: user.clone(),
        });
        user
    }

    /// Clear the session unless another task already replaced the token
    fn clear_session_if_token(&self, token: &str) {
        let _guard = self.write_guard();
        if self.state.load().token.as_deref() != Some(token) {
            return;
        }
        self.persist(USER_KEY, None);
        self.persist(TOKEN_KEY, None);
        self.state.store(Arc::new(SessionState::default()));
    }

    // Poisoning is ignored; the guarded data is a unit
    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    // Callers hold the write guard, so a plain load and store cannot race
    fn update(&self, f: impl FnOnce(&SessionState) -> SessionState) {
        let next = f(&self.state.load());
        self.state.store(Arc::new(next));
    }

    // Storage failures never fail the mutation; memory stays authoritative
    fn persist(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(value) => self.storage.set_item(key, value),
            None => self.storage.remove_item(key),
        };
        if let Err(e) = result {
            warn!(key, error = %e, "Failed to mirror session to storage");
        }
    }
}
