use crate::bom_reporting::domain::AccessToken;
use crate::shared::error::AuthError;
use std::fmt;

/// Distributor API client id/secret pair, sourced from pipeline secrets
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// CredentialExchange port for obtaining the run's access token
///
/// Called once at pipeline start. Any failure is fatal for the run.
pub trait CredentialExchange {
    /// Exchanges the client id/secret for a short-lived access token
    ///
    /// # Errors
    /// - `AuthError::Rejected` when the identity endpoint refuses the credentials
    /// - `AuthError::Unavailable` when the endpoint cannot be reached or fails
    /// - `AuthError::InvalidResponse` when the token response cannot be parsed
    fn exchange(&self, credentials: &Credentials) -> std::result::Result<AccessToken, AuthError>;
}
