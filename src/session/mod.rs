pub mod storage;
pub mod traits;

pub use storage::{FileStorage, MemoryStorage};
pub use traits::SessionStorage;

use crate::config::AppConfig;
use crate::forms::validate_signup;
use crate::models::{Role, User};
use anyhow::{Context, Result};
use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated(User),
}

/// The signed-in user, mirrored into a durable slot
pub struct Session<S: SessionStorage> {
    storage: S,
    key: String,
    latency: Duration,
    state: SessionState,
}

impl<S: SessionStorage> Session<S> {
    /// Read the slot once. A missing or unreadable record leaves the session anonymous.
    pub async fn restore(storage: S, config: &AppConfig) -> Self {
        let state = match storage.get(&config.session_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!("Restored session for {}", user.email);
                    SessionState::Authenticated(user)
                }
                Err(e) => {
                    warn!("Discarding unreadable session record: {}", e);
                    SessionState::Anonymous
                }
            },
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                warn!("Could not read session slot, starting signed out: {:#}", e);
                SessionState::Anonymous
            }
        };

        Self {
            storage,
            key: config.session_key.clone(),
            latency: config.auth_latency,
            state,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Always succeeds with the demo identity; the password is never checked.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<&User> {
        let email = email.to_string();
        self.authenticate(move || User {
            id: "1".to_string(),
            email,
            first_name: "Vivek".to_string(),
            last_name: "DK".to_string(),
            avatar: None,
            role: Role::Client,
            created_at: Utc::now(),
        })
        .await
    }

    pub async fn signup(
        &mut self,
        email: &str,
        _password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<&User> {
        validate_signup(first_name, last_name)?;
        let (email, first_name, last_name) =
            (email.to_string(), first_name.to_string(), last_name.to_string());
        self.authenticate(move || User {
            id: "1".to_string(),
            email,
            first_name,
            last_name,
            avatar: None,
            role: Role::Guest,
            created_at: Utc::now(),
        })
        .await
    }

    /// The slot is cleared first; if that fails the user stays signed in.
    pub async fn logout(&mut self) -> Result<()> {
        self.storage
            .remove(&self.key)
            .await
            .context("Failed to clear session slot")?;
        self.state = SessionState::Anonymous;
        info!("Signed out");
        Ok(())
    }

    async fn authenticate<F>(&mut self, make_user: F) -> Result<&User>
    where
        F: FnOnce() -> User,
    {
        self.state = SessionState::Authenticating;
        tokio::time::sleep(self.latency).await;

        let user = make_user();
        if let Err(e) = self.persist(&user).await {
            self.state = SessionState::Anonymous;
            return Err(e);
        }

        info!("Signed in as {} ({:?})", user.email, user.role);
        self.state = SessionState::Authenticated(user);
        self.user().context("Session lost its user after sign-in")
    }

    async fn persist(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user).context("Failed to serialize session user")?;
        self.storage
            .set(&self.key, &json)
            .await
            .context("Failed to persist session")
    }
}
