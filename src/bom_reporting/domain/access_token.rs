use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Opaque bearer credential obtained once per run.
///
/// Not refreshed mid-run and never persisted. `Debug` redacts the secret
/// so the token cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    /// Builds a token from the `expires_in` seconds of a token response.
    ///
    /// Returns `None` when the lifetime does not fit a timestamp.
    pub fn expiring_in(value: String, expires_in_secs: i64, now: DateTime<Utc>) -> Option<Self> {
        let lifetime = TimeDelta::try_seconds(expires_in_secs.max(0))?;
        let expires_at = now.checked_add_signed(lifetime)?;
        Some(Self::new(value, expires_at))
    }

    pub fn secret(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
