use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::LeasewebResult,
            model::dhcp_lease::{DhcpLease, NewLease},
        },
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Retrieves the DHCP reservations of a server.
    pub async fn dhcp_lease(&self, server_id: &str) -> LeasewebResult<DhcpLease> {
        let context = format!("getting server {server_id} lease");
        let url = self.api_client.endpoint(&["servers", server_id, "leases"])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        self.api_client.fetch(request).await
    }

    /// Creates a DHCP reservation that network-boots the server from `bootfile`.
    pub async fn add_dhcp_lease(&self, server_id: &str, bootfile: &str) -> LeasewebResult<()> {
        let context = format!("adding server {server_id} lease");
        let url = self.api_client.endpoint(&["servers", server_id, "leases"])?;
        let request = ApiRequest::new(context, Method::POST, url, StatusCode::NO_CONTENT)
            .json(&NewLease { bootfile })?;

        self.api_client.dispatch(request).await
    }

    /// Deletes the DHCP reservations of a server.
    pub async fn remove_dhcp_lease(&self, server_id: &str) -> LeasewebResult<()> {
        let context = format!("removing server {server_id} lease");
        let url = self.api_client.endpoint(&["servers", server_id, "leases"])?;
        let request = ApiRequest::new(context, Method::DELETE, url, StatusCode::NO_CONTENT);

        self.api_client.dispatch(request).await
    }
}
