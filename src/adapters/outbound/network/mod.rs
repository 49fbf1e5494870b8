/// Network adapters for the DigiKey API
mod api_settings;
mod digikey_auth;
mod digikey_client;
mod digikey_models;

pub use api_settings::{DigiKeyApiSettings, DigiKeyLocale, DEFAULT_API_BASE_URL, DEFAULT_SEARCH_LIMIT};
pub use digikey_auth::DigiKeyAuthenticator;
pub use digikey_client::DigiKeyClient;
