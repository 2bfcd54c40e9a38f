//! In-memory credential cache.

use chrono::{DateTime, Duration, Utc};

use crate::tokens::AccessToken;

/// Holds the current bearer token and the instant it stops being trusted.
///
/// The expiry is computed client-side at acquisition time; the token body is
/// never inspected for an expiry claim. Nothing here is persisted.
#[derive(Debug, Default, Clone)]
pub struct CredentialCache {
    current: Option<CachedToken>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: AccessToken,
    expires_at: DateTime<Utc>,
}

impl CredentialCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached token; it expires `lifetime` after `now`.
    pub fn store(&mut self, token: AccessToken, now: DateTime<Utc>, lifetime: Duration) {
        self.current = Some(CachedToken {
            token,
            expires_at: now + lifetime,
        });
    }

    /// Returns the token if it is still usable at `now`.
    ///
    /// A token stops being usable once `now >= expires_at - margin`.
    pub fn usable_at(&self, now: DateTime<Utc>, margin: Duration) -> Option<&AccessToken> {
        self.current
            .as_ref()
            .filter(|cached| now < cached.expires_at - margin)
            .map(|cached| &cached.token)
    }

    /// Returns the expiry of the cached token, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.current.as_ref().map(|cached| cached.expires_at)
    }

    /// Returns true if no token has been stored.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Drop the cached token.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the cached token only if it is `token`. Returns true if dropped.
    ///
    /// A rejection of an older token must not discard a newer one stored by
    /// a concurrent login.
    pub fn clear_if(&mut self, token: &AccessToken) -> bool {
        let matches = self
            .current
            .as_ref()
            .is_some_and(|cached| &cached.token == token);
        if matches {
            self.current = None;
        }
        matches
    }
}
