use chrono::Utc;
use digikey_bom_report::bom_reporting::domain::AccessToken;
use digikey_bom_report::prelude::*;
use digikey_bom_report::shared::error::AuthError;
use std::sync::{Arc, Mutex};

/// Mock CredentialExchange that hands out a fixed token or a fixed error
#[derive(Clone)]
pub struct MockCredentialExchange {
    reject_with: Option<u16>,
    calls: Arc<Mutex<usize>>,
}

impl MockCredentialExchange {
    pub fn new() -> Self {
        Self {
            reject_with: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CredentialExchange for MockCredentialExchange {
    fn exchange(&self, _credentials: &Credentials) -> std::result::Result<AccessToken, AuthError> {
        *self.calls.lock().unwrap() += 1;
        match self.reject_with {
            Some(status) => Err(AuthError::Rejected {
                status,
                details: "invalid_client".to_string(),
            }),
            None => Ok(AccessToken::expiring_in(
                "test-token".to_string(),
                600,
                Utc::now(),
            )
            .unwrap()),
        }
    }
}
