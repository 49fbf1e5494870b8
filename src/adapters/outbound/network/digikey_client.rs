use super::api_settings::{summarize_body, DigiKeyApiSettings, DigiKeyLocale};
use super::digikey_models::{KeywordSearchRequest, KeywordSearchResponse};
use crate::bom_reporting::domain::{PartNumber, PartSearchResult, RunContext};
use crate::ports::outbound::{PartSearchRepository, SearchError};
use crate::shared::Result;
use reqwest::StatusCode;

/// DigiKeyClient adapter for the Product Information v4 keyword search
///
/// This adapter implements the PartSearchRepository port. Each call sends
/// exactly one `POST /products/v4/search/keyword` request; retrying is left
/// to the caller, which is why every failure is classified into transient
/// and permanent kinds here.
pub struct DigiKeyClient {
    client: reqwest::blocking::Client,
    search_url: String,
    locale: DigiKeyLocale,
    search_limit: u32,
}

impl DigiKeyClient {
    pub fn new(settings: &DigiKeyApiSettings) -> Result<Self> {
        Ok(Self {
            client: settings.http_client()?,
            search_url: settings.keyword_search_url(),
            locale: settings.locale.clone(),
            search_limit: settings.search_limit,
        })
    }

    fn parse_response(body: &str) -> std::result::Result<PartSearchResult, SearchError> {
        let response: KeywordSearchResponse =
            serde_json::from_str(body).map_err(|e| SearchError::Rejected {
                status: StatusCode::OK.as_u16(),
                details: format!("unparsable search response: {}", e),
            })?;
        Ok(PartSearchResult::from(response))
    }
}

/// Maps a non-success search status onto the search error kinds
fn classify_status(status: StatusCode, body: &str) -> SearchError {
    if status == StatusCode::NOT_FOUND {
        return SearchError::NotFound;
    }

    if status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
    {
        return SearchError::Transient {
            details: format!("HTTP {}: {}", status.as_u16(), summarize_body(body)),
        };
    }

    SearchError::Rejected {
        status: status.as_u16(),
        details: summarize_body(body),
    }
}

impl PartSearchRepository for DigiKeyClient {
    fn search(
        &self,
        context: &RunContext,
        part_number: &PartNumber,
    ) -> std::result::Result<PartSearchResult, SearchError> {
        let request = KeywordSearchRequest {
            keywords: part_number.as_str(),
            limit: self.search_limit,
        };

        let response = self
            .client
            .post(&self.search_url)
            .bearer_auth(context.access_token().secret())
            .header("X-DIGIKEY-Client-Id", context.client_id())
            .header("X-DIGIKEY-Locale-Site", &self.locale.site)
            .header("X-DIGIKEY-Locale-Language", &self.locale.language)
            .header("X-DIGIKEY-Locale-Currency", &self.locale.currency)
            .header("X-DIGIKEY-Customer-Id", &self.locale.customer_id)
            .json(&request)
            .send()
            .map_err(|e| SearchError::Transient {
                details: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| SearchError::Transient {
            details: e.to_string(),
        })?;

        if !status.is_success() {
            let error = classify_status(status, &body);
            tracing::debug!(part = %part_number, status = status.as_u16(), error = %error, "search failed");
            return Err(error);
        }

        Self::parse_response(&body)
    }
}
