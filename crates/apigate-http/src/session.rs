//! Session lifecycle: login, refresh, and single-flight renewal.

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use apigate_core::error::AuthError;
use apigate_core::{CredentialPair, Credentials, Result, SessionToken, TokenExchange};

use crate::exchange::HttpTokenExchange;

/// Owns the current [`CredentialPair`] and performs the exchanges that
/// create and renew it.
///
/// # Concurrency
///
/// At most one login or refresh exchange is in flight at a time. Every
/// exchange runs under the `renewal` mutex. Each change to the stored pair
/// bumps a generation counter, and a caller that waited on the mutex
/// compares the generation it started from with the current one: if it
/// moved, someone else already finished an exchange and the waiter takes
/// that result (the new token, or [`AuthError::NotAuthenticated`] when the
/// exchange failed) instead of starting another.
///
/// Readers never see a half-updated pair; the pair is swapped whole under
/// the `state` write lock, and readers copy the access token out.
pub struct SessionManager<E = HttpTokenExchange> {
    exchange: E,
    credentials: Credentials,
    state: RwLock<SessionState>,
    renewal: Mutex<()>,
}

#[derive(Default)]
struct SessionState {
    pair: Option<CredentialPair>,
    generation: u64,
}

impl SessionState {
    fn token(&self) -> Option<SessionToken> {
        self.pair
            .as_ref()
            .map(|pair| SessionToken::new(pair.access().clone(), self.generation))
    }

    fn install(&mut self, pair: CredentialPair) -> SessionToken {
        self.generation += 1;
        let token = SessionToken::new(pair.access().clone(), self.generation);
        self.pair = Some(pair);
        token
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.pair = None;
    }
}

impl<E: TokenExchange> SessionManager<E> {
    pub fn new(exchange: E, credentials: Credentials) -> Self {
        Self {
            exchange,
            credentials,
            state: RwLock::new(SessionState::default()),
            renewal: Mutex::new(()),
        }
    }

    /// Returns the exchange this manager drives.
    pub fn exchange(&self) -> &E {
        &self.exchange
    }

    /// Return a usable access token, logging in first if there is no session.
    ///
    /// With a session in place this is a read and never touches the network;
    /// expiry is only learned from a 401 on a real call.
    pub async fn ensure_authenticated(&self) -> Result<SessionToken> {
        let observed = {
            let state = self.state.read().await;
            if let Some(token) = state.token() {
                return Ok(token);
            }
            state.generation
        };

        let _guard = self.renewal.lock().await;
        {
            let state = self.state.read().await;
            if state.generation != observed {
                debug!("session exchange completed while waiting");
                return state
                    .token()
                    .ok_or_else(|| AuthError::NotAuthenticated.into());
            }
        }

        self.login_locked().await
    }

    /// Log in with the static credentials, replacing any current pair.
    ///
    /// The old pair is dropped before the exchange starts, so a failed login
    /// leaves the manager unauthenticated.
    pub async fn login(&self) -> Result<SessionToken> {
        let _guard = self.renewal.lock().await;
        self.login_locked().await
    }

    /// Renew the session after `rejected` drew a 401.
    ///
    /// If the stored pair has already moved past `rejected`, the newer token
    /// is returned without any exchange. Otherwise the refresh token is
    /// exchanged; when that fails the manager falls back to a full login.
    #[instrument(skip(self, rejected), fields(generation = rejected.generation()))]
    pub async fn refresh_access_token(&self, rejected: &SessionToken) -> Result<SessionToken> {
        let _guard = self.renewal.lock().await;

        let refresh_token = {
            let state = self.state.read().await;
            if state.generation != rejected.generation() {
                debug!(current = state.generation, "reusing renewal from another caller");
                return state
                    .token()
                    .ok_or_else(|| AuthError::NotAuthenticated.into());
            }
            state.pair.as_ref().map(|pair| pair.refresh().clone())
        };

        let Some(refresh_token) = refresh_token else {
            return self.login_locked().await;
        };

        info!("Refreshing session");
        match self.exchange.refresh(&refresh_token).await {
            Ok(pair) => {
                let token = self.state.write().await.install(pair);
                debug!(generation = token.generation(), "Session refreshed");
                Ok(token)
            }
            Err(err) => {
                warn!(error = %err, "refresh failed, logging in again");
                self.login_locked().await
            }
        }
    }

    /// Discard the current pair. The next [`ensure_authenticated`] logs in.
    ///
    /// [`ensure_authenticated`]: Self::ensure_authenticated
    pub async fn clear(&self) {
        self.state.write().await.invalidate();
    }

    /// Discard the current pair only if it is still the one `token` came from.
    ///
    /// Returns false when a newer pair has been installed since.
    pub async fn invalidate(&self, token: &SessionToken) -> bool {
        let mut state = self.state.write().await;
        if state.generation == token.generation() {
            state.invalidate();
            true
        } else {
            false
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.pair.is_some()
    }

    /// The current token, if any, without logging in.
    pub async fn current(&self) -> Option<SessionToken> {
        self.state.read().await.token()
    }

    /// Login exchange. Caller must hold `renewal`.
    #[instrument(skip(self), fields(username = %self.credentials.username()))]
    async fn login_locked(&self) -> Result<SessionToken> {
        info!("Logging in");
        self.state.write().await.pair = None;

        match self.exchange.login(&self.credentials).await {
            Ok(pair) => {
                let token = self.state.write().await.install(pair);
                debug!(generation = token.generation(), "Login succeeded");
                Ok(token)
            }
            Err(err) => {
                self.state.write().await.invalidate();
                Err(err)
            }
        }
    }
}

impl<E> std::fmt::Debug for SessionManager<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("username", &self.credentials.username())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
