use crate::shared::Result;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.digikey.com";
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Locale headers sent with every search; they decide the currency and
/// the customer-specific pricing in the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigiKeyLocale {
    pub site: String,
    pub language: String,
    pub currency: String,
    pub customer_id: String,
}

impl Default for DigiKeyLocale {
    fn default() -> Self {
        Self {
            site: "US".to_string(),
            language: "en".to_string(),
            currency: "USD".to_string(),
            customer_id: "0".to_string(),
        }
    }
}

/// Connection settings shared by the token and search adapters
#[derive(Debug, Clone)]
pub struct DigiKeyApiSettings {
    pub base_url: String,
    pub locale: DigiKeyLocale,
    pub search_limit: u32,
    pub timeout: Duration,
}

impl DigiKeyApiSettings {
    pub fn token_url(&self) -> String {
        format!("{}/v1/oauth2/token", self.base_url.trim_end_matches('/'))
    }

    pub fn keyword_search_url(&self) -> String {
        format!(
            "{}/products/v4/search/keyword",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Blocking client with the tool's user agent and request timeout
    pub(crate) fn http_client(&self) -> Result<reqwest::blocking::Client> {
        let user_agent = format!("digikey-bom-report/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(client)
    }
}

impl Default for DigiKeyApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: DigiKeyLocale::default(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Shortens an error body for logs and report notes
pub(crate) fn summarize_body(body: &str) -> String {
    use super::digikey_models::DkErrorResponse;

    if let Ok(error) = serde_json::from_str::<DkErrorResponse>(body) {
        let parts: Vec<String> = [error.error_message, error.error_details]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if !parts.is_empty() {
            return parts.join(": ");
        }
    }

    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_CHARS {
        format!("{}...", trimmed.chars().take(MAX_CHARS).collect::<String>())
    } else {
        trimmed.to_string()
    }
}
