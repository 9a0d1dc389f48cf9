//! Client-side authentication session.
//!
//! [`AuthSession`] is the one place a client keeps its authentication state:
//! the signed-in user, the token pair, and whether start-up restoration has
//! finished. Persistence goes through a [`SessionStorage`] so the same model
//! works over browser storage, a file, or memory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "auth_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key for the JSON-encoded [`SessionUser`].
pub const USER_KEY: &str = "user";

/// Key/value persistence backing a session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// The signed-in user as the client sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

/// Token pair issued by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of checking a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Restoration has not finished; show nothing yet.
    Pending,
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Authentication state plus the storage it is mirrored to.
#[derive(Debug)]
pub struct AuthSession<S: SessionStorage> {
    storage: S,
    user: Option<SessionUser>,
    tokens: Option<SessionTokens>,
    loading: bool,
}

impl<S: SessionStorage> AuthSession<S> {
    /// A session over `storage` that has not looked at it yet.
    ///
    /// Stays loading, and [`guard`](Self::guard) answers
    /// [`GuardOutcome::Pending`], until [`restore`](Self::restore) runs.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            user: None,
            tokens: None,
            loading: true,
        }
    }

    /// [`new`](Self::new) followed by [`restore`](Self::restore).
    pub fn init(storage: S) -> Self {
        let mut session = Self::new(storage);
        session.restore();
        session
    }

    /// Load whatever the storage holds and finish loading.
    ///
    /// A session is restored only when both the access token and the user
    /// are present and the user parses. A user entry that fails to parse
    /// wipes all three keys.
    pub fn restore(&mut self) {
        let access = self.storage.get(ACCESS_TOKEN_KEY);
        let user = self.storage.get(USER_KEY);

        if let (Some(access_token), Some(raw_user)) = (access, user) {
            match serde_json::from_str::<SessionUser>(&raw_user) {
                Ok(user) => {
                    let refresh_token = self.storage.get(REFRESH_TOKEN_KEY).unwrap_or_default();
                    self.user = Some(user);
                    self.tokens = Some(SessionTokens {
                        access_token,
                        refresh_token,
                    });
                }
                Err(_) => self.clear_storage(),
            }
        }

        self.loading = false;
    }

    /// Record a successful login or registration.
    pub fn login(&mut self, user: SessionUser, tokens: SessionTokens) {
        self.persist_tokens(&tokens);
        self.persist_user(&user);
        self.user = Some(user);
        self.tokens = Some(tokens);
    }

    /// Replace the token pair after a refresh. Ignored when signed out.
    pub fn apply_refresh(&mut self, tokens: SessionTokens) {
        if self.user.is_none() {
            return;
        }
        self.persist_tokens(&tokens);
        self.tokens = Some(tokens);
    }

    /// Replace the cached user, e.g. after `/auth/me`.
    pub fn update_user(&mut self, user: SessionUser) {
        if self.tokens.is_none() {
            return;
        }
        self.persist_user(&user);
        self.user = Some(user);
    }

    /// Drop the session from memory and storage.
    pub fn logout(&mut self) {
        self.clear_storage();
        self.user = None;
        self.tokens = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.tokens.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn tokens(&self) -> Option<&SessionTokens> {
        self.tokens.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Decide whether a route requiring `required_roles` may be shown.
    ///
    /// An empty role list only requires authentication.
    pub fn guard(&self, required_roles: &[&str]) -> GuardOutcome {
        if self.loading {
            return GuardOutcome::Pending;
        }
        let Some(user) = self.user.as_ref().filter(|_| self.tokens.is_some()) else {
            return GuardOutcome::RedirectToLogin;
        };
        if required_roles.is_empty() || required_roles.contains(&user.role.as_str()) {
            GuardOutcome::Allow
        } else {
            GuardOutcome::RedirectToUnauthorized
        }
    }

    fn persist_tokens(&mut self, tokens: &SessionTokens) {
        self.storage.set(ACCESS_TOKEN_KEY, tokens.access_token.clone());
        self.storage.set(REFRESH_TOKEN_KEY, tokens.refresh_token.clone());
    }

    fn persist_user(&mut self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, json),
            Err(_) => self.storage.remove(USER_KEY),
        }
    }

    fn clear_storage(&mut self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
