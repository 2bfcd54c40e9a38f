//! Session management for authenticated conversion calls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared, WeakShared};
use tracing::{debug, info, instrument, warn};

use skyframe_core::error::AuthError;
use skyframe_core::{AccessToken, CredentialCache, Credentials, Result, ServiceUrl};

use crate::http::HttpClient;

/// Tunables for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// How long a freshly issued token is trusted.
    ///
    /// The service does not report token lifetimes, so this is an assumption
    /// about its configuration. If the server-side lifetime changes, this
    /// must change with it.
    pub token_lifetime: chrono::Duration,

    /// A token is refreshed once it has less than this much life left.
    pub safety_margin: chrono::Duration,

    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            token_lifetime: chrono::Duration::minutes(20),
            safety_margin: chrono::Duration::seconds(60),
            request_timeout: Duration::from_secs(30),
        }
    }
}

type LoginExchange = BoxFuture<'static, std::result::Result<AccessToken, AuthError>>;

/// An authenticated connection to a conversion service.
///
/// The session exclusively owns the credential cache. [`Session::ensure`]
/// returns a token that is valid for at least the safety margin, logging in
/// first if needed.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`) and are safe to
/// share across tasks. Concurrent callers that find the cache stale await one
/// shared login exchange instead of each starting their own. The session only
/// holds a weak reference to that exchange, so it is dropped once every
/// waiter has been cancelled and the next caller starts a fresh one.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: HttpClient,
    credentials: Credentials,
    options: SessionOptions,
    cache: Mutex<CredentialCache>,
    login: Mutex<Option<WeakShared<LoginExchange>>>,
}

impl Session {
    /// Create a session with default options. No request is made until the
    /// first call needs a token.
    pub fn new(service: ServiceUrl, credentials: Credentials) -> Result<Self> {
        Self::with_options(service, credentials, SessionOptions::default())
    }

    /// Create a session with explicit options.
    pub fn with_options(
        service: ServiceUrl,
        credentials: Credentials,
        options: SessionOptions,
    ) -> Result<Self> {
        let client = HttpClient::new(service, options.request_timeout)?;

        Ok(Self {
            inner: Arc::new(SessionInner {
                client,
                credentials,
                options,
                cache: Mutex::new(CredentialCache::new()),
                login: Mutex::new(None),
            }),
        })
    }

    /// Returns the service URL for this session.
    pub fn service(&self) -> &ServiceUrl {
        self.inner.client.service()
    }

    /// Returns when the cached token expires, if one is cached.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        lock(&self.inner.cache).expires_at()
    }

    /// Guarantee a usable token, logging in if the cache is empty or the
    /// cached token is within the safety margin of expiry.
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the login exchange fails. Nothing
    /// is cached in that case and the login is not retried.
    #[instrument(skip(self), fields(service = %self.service()))]
    pub async fn ensure(&self) -> Result<AccessToken> {
        if let Some(token) = self.usable_token() {
            debug!("Reusing cached credential");
            return Ok(token);
        }

        let login = {
            let mut slot = lock(&self.inner.login);
            // A login may have finished between the first check and taking the slot.
            if let Some(token) = self.usable_token() {
                return Ok(token);
            }
            match slot.as_ref().and_then(WeakShared::upgrade) {
                Some(login) => login,
                None => {
                    debug!("Starting login exchange");
                    let login: Shared<LoginExchange> =
                        login_exchange(Arc::clone(&self.inner)).boxed().shared();
                    *slot = login.downgrade();
                    login
                }
            }
        };

        Ok(login.await?)
    }

    /// Drop the cached token so the next call logs in again, unless it has
    /// already been replaced by a newer token than `rejected`.
    pub fn invalidate(&self, rejected: &AccessToken) {
        if lock(&self.inner.cache).clear_if(rejected) {
            debug!("Invalidated cached credential");
        } else {
            debug!("Rejected credential already replaced");
        }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.inner.client
    }

    fn usable_token(&self) -> Option<AccessToken> {
        lock(&self.inner.cache)
            .usable_at(Utc::now(), self.inner.options.safety_margin)
            .cloned()
    }
}

/// One login exchange. The cache is written only after a successful
/// response, then the in-flight slot is released.
async fn login_exchange(
    inner: Arc<SessionInner>,
) -> std::result::Result<AccessToken, AuthError> {
    info!(username = %inner.credentials.username(), "Logging in");

    let outcome = inner.client.request_token(&inner.credentials).await;

    match &outcome {
        Ok(token) => {
            let mut cache = lock(&inner.cache);
            cache.store(token.clone(), Utc::now(), inner.options.token_lifetime);
            debug!(expires_at = ?cache.expires_at(), "Credential cached");
        }
        Err(e) => warn!(error = %e, "Login failed"),
    }

    lock(&inner.login).take();
    outcome
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("service", self.service())
            .field("username", &self.inner.credentials.username())
            .field("expires_at", &self.expires_at())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_service_contract() {
        let options = SessionOptions::default();
        assert_eq!(options.token_lifetime, chrono::Duration::minutes(20));
        assert_eq!(options.safety_margin, chrono::Duration::seconds(60));
    }

    #[test]
    fn new_session_has_empty_cache() {
        let service = ServiceUrl::new("https://spice.example.org").unwrap();
        let session = Session::new(service, Credentials::new("observer", "secret")).unwrap();
        assert!(session.expires_at().is_none());
        assert!(session.usable_token().is_none());
    }

    #[test]
    fn debug_hides_password() {
        let service = ServiceUrl::new("https://spice.example.org").unwrap();
        let session = Session::new(service, Credentials::new("observer", "secret123")).unwrap();
        let debug = format!("{:?}", session);
        assert!(debug.contains("observer"));
        assert!(!debug.contains("secret123"));
    }
}
