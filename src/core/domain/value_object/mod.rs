mod api_token;
mod api_url;
pub(crate) mod serde_helpers;

pub use api_token::LeasewebApiToken;
pub use api_url::LeasewebApiUrl;
