mod core;
mod resources;

pub use crate::core::domain::{
    error::{ErrorInfo, LeasewebError, LeasewebResult, ValidationError},
    model::{
        Contract, ControlPanel, Credential, DhcpLease, InterfaceAddress, Ip, Job, Lease, Location,
        NetworkInterfaceInfo, NetworkInterfaces, NetworkType, NotificationSetting,
        NotificationType, OperatingSystem, Payload, PowerInfo, PowerStatus, Server,
    },
    value_object::{LeasewebApiToken, LeasewebApiUrl},
};
pub use crate::resources::pagination::{DEFAULT_PAGE_SIZE, Page};

use crate::core::infrastructure::api_client::ApiClient;
use std::env;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.leaseweb.com";

/// Environment variable holding the API token, read by [`LeasewebClientBuilder::from_env`].
pub const TOKEN_ENV_VAR: &str = "LEASEWEB_API_TOKEN";

/// Environment variable overriding the base URL, read by [`LeasewebClientBuilder::from_env`].
pub const BASE_URL_ENV_VAR: &str = "LEASEWEB_API_URL";

/// A client for the Leaseweb bare metal API.
///
/// The client carries its own base URL, token and HTTP transport, so several
/// clients with different credentials can be used side by side. It holds no
/// mutable state and can be cloned freely.
///
/// # Examples
///
/// ```no_run
/// use leaseweb_baremetal::{LeasewebClient, LeasewebResult};
///
/// #[tokio::main]
/// async fn main() -> LeasewebResult<()> {
///     let client = LeasewebClient::builder()
///         .token("my-api-token")?
///         .build()?;
///
///     let servers = client.all_servers(Some("AMS-01")).await?;
///     for server in servers {
///         println!("{} {:?}", server.id, server.public_ip());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LeasewebClient {
    pub(crate) api_client: ApiClient,
}

/// Builder for LeasewebClient configuration
#[derive(Debug, Default)]
pub struct LeasewebClientBuilder {
    base_url: Option<LeasewebApiUrl>,
    token: Option<LeasewebApiToken>,
    http_client: Option<reqwest::Client>,
}

impl LeasewebClientBuilder {
    /// Sets the API base URL. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl AsRef<str>) -> LeasewebResult<Self> {
        self.base_url = Some(LeasewebApiUrl::new(url.as_ref())?);
        Ok(self)
    }

    /// Sets the API token sent with every request.
    pub fn token(mut self, token: impl Into<String>) -> LeasewebResult<Self> {
        self.token = Some(LeasewebApiToken::new(token)?);
        Ok(self)
    }

    /// Uses an existing HTTP client (timeouts, proxies, TLS settings are taken from it).
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Seeds a builder from `LEASEWEB_API_TOKEN` and, if set, `LEASEWEB_API_URL`.
    ///
    /// # Errors
    /// Returns a validation error if the token variable is missing or either value is invalid.
    pub fn from_env() -> LeasewebResult<Self> {
        let token = env::var(TOKEN_ENV_VAR).map_err(|_| ValidationError::Field {
            field: TOKEN_ENV_VAR.to_string(),
            message: "Environment variable is not set".to_string(),
        })?;

        let builder = Self::default().token(token)?;
        match env::var(BASE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url),
            _ => Ok(builder),
        }
    }

    /// Builds the client.
    ///
    /// # Errors
    /// Returns a validation error if no token was configured, or a transport
    /// error if the default HTTP client cannot be created.
    pub fn build(self) -> LeasewebResult<LeasewebClient> {
        let token = self.token.ok_or_else(|| ValidationError::Field {
            field: "token".to_string(),
            message: "API token is required".to_string(),
        })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => LeasewebApiUrl::new(DEFAULT_BASE_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };

        Ok(LeasewebClient {
            api_client: ApiClient::new(http_client, base_url, &token)?,
        })
    }
}

impl LeasewebClient {
    /// Creates a new builder for LeasewebClient configuration
    pub fn builder() -> LeasewebClientBuilder {
        LeasewebClientBuilder::default()
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &LeasewebApiUrl {
        self.api_client.base_url()
    }
}

#[cfg(test)]
mod tests;
