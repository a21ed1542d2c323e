//! Admin session guard.
//!
//! Client-side state machine with two states, [`SessionState::Anonymous`] and
//! [`SessionState::Authenticated`]. The token itself is issued and verified by
//! the server; the guard only decides whether a held token is worth keeping.
//!
//! ```text
//! restore(store, accept) --token accepted--> Authenticated
//!                        --no token / rejected--> Anonymous
//! Anonymous     --establish(token)--> Authenticated
//! Authenticated --logout()---------> Anonymous   (token removed from store)
//! ```

/// Persistent storage for the session token (browser storage, a file, ...).
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, token: &str);
    fn remove(&mut self);
}

/// In-process [`TokenStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn remove(&mut self) {
        self.token = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

pub struct AdminSession<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> AdminSession<S> {
    /// Restore state on start-up.
    ///
    /// A stored token is kept only if `accept` returns `true` for it; a
    /// rejected token is removed from the store.
    pub fn restore(mut store: S, accept: impl Fn(&str) -> bool) -> Self {
        let token = match store.load() {
            Some(token) if accept(&token) => Some(token),
            Some(_) => {
                store.remove();
                None
            }
            None => None,
        };
        Self { store, token }
    }

    pub fn state(&self) -> SessionState {
        if self.token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Record a token returned by a successful login.
    pub fn establish(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token);
    }

    /// Drop the session. Returns the token so the caller can revoke it.
    pub fn logout(&mut self) -> Option<String> {
        self.store.remove();
        self.token.take()
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
