use super::api_settings::{summarize_body, DigiKeyApiSettings};
use super::digikey_models::TokenResponse;
use crate::bom_reporting::domain::AccessToken;
use crate::ports::outbound::{CredentialExchange, Credentials};
use crate::shared::error::AuthError;
use crate::shared::Result;
use chrono::Utc;
use reqwest::StatusCode;

/// Lifetime assumed when the token response carries no `expires_in`
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 600;

/// DigiKeyAuthenticator adapter for the OAuth2 client-credentials grant
///
/// This adapter implements the CredentialExchange port against
/// `POST /v1/oauth2/token`. The client id and secret travel as HTTP basic
/// auth; the body only names the grant type.
pub struct DigiKeyAuthenticator {
    client: reqwest::blocking::Client,
    token_url: String,
}

impl DigiKeyAuthenticator {
    pub fn new(settings: &DigiKeyApiSettings) -> Result<Self> {
        Ok(Self {
            client: settings.http_client()?,
            token_url: settings.token_url(),
        })
    }

    fn parse_token(body: &str) -> std::result::Result<AccessToken, AuthError> {
        let response: TokenResponse =
            serde_json::from_str(body).map_err(|e| AuthError::InvalidResponse {
                details: e.to_string(),
            })?;

        if response.access_token.trim().is_empty() {
            return Err(AuthError::InvalidResponse {
                details: "token response contained an empty access_token".to_string(),
            });
        }

        let lifetime = response.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        AccessToken::expiring_in(response.access_token, lifetime, Utc::now()).ok_or_else(|| {
            AuthError::InvalidResponse {
                details: format!("expires_in out of range: {}", lifetime),
            }
        })
    }
}

/// Maps a non-success token endpoint status onto the auth error kinds
fn classify_status(status: StatusCode, body: &str) -> AuthError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AuthError::Rejected {
                status: status.as_u16(),
                details: summarize_body(body),
            }
        }
        _ => AuthError::Unavailable {
            details: format!("HTTP {}: {}", status.as_u16(), summarize_body(body)),
        },
    }
}

impl CredentialExchange for DigiKeyAuthenticator {
    fn exchange(&self, credentials: &Credentials) -> std::result::Result<AccessToken, AuthError> {
        tracing::debug!(url = %self.token_url, client_id = credentials.client_id(), "requesting access token");

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .map_err(|e| AuthError::Unavailable {
                details: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| AuthError::Unavailable {
            details: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(classify_status(status, &body));
        }

        let token = Self::parse_token(&body)?;
        tracing::info!(expires_at = %token.expires_at(), "access token obtained");
        Ok(token)
    }
}
