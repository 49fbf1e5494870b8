use super::access_token::AccessToken;

/// Per-run state shared by every distributor call: the access token and the
/// client id it was issued to.
///
/// Built once after the credential exchange and passed by reference into
/// each search; read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct RunContext {
    access_token: AccessToken,
    client_id: String,
}

impl RunContext {
    pub fn new(access_token: AccessToken, client_id: impl Into<String>) -> Self {
        Self {
            access_token,
            client_id: client_id.into(),
        }
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}
