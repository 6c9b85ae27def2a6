use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::LeasewebResult,
            model::ip::{Ip, ReverseLookupUpdate},
        },
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Retrieves one IP address of a server.
    pub async fn server_ip(&self, server_id: &str, ip: &str) -> LeasewebResult<Ip> {
        let context = format!("getting server {server_id} IP {ip}");
        let url = self.api_client.endpoint(&["servers", server_id, "ips", ip])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        self.api_client.fetch(request).await
    }

    /// Sets the reverse lookup (PTR) record of a server IP.
    pub async fn update_reverse_lookup(
        &self,
        server_id: &str,
        ip: &str,
        reverse_lookup: &str,
    ) -> LeasewebResult<()> {
        let context = format!("updating server {server_id} reverse lookup for IP {ip}");
        let url = self.api_client.endpoint(&["servers", server_id, "ips", ip])?;
        let request = ApiRequest::new(context, Method::PUT, url, StatusCode::OK)
            .json(&ReverseLookupUpdate { reverse_lookup })?;

        self.api_client.dispatch(request).await
    }

    /// Null routes an IP. The API processes the request asynchronously.
    pub async fn null_ip(&self, server_id: &str, ip: &str) -> LeasewebResult<()> {
        let context = format!("nulling server {server_id} IP {ip}");
        let url = self
            .api_client
            .endpoint(&["servers", server_id, "ips", ip, "null"])?;
        let request = ApiRequest::new(context, Method::POST, url, StatusCode::ACCEPTED);

        self.api_client.dispatch(request).await
    }

    /// Removes a null route from an IP. The API processes the request asynchronously.
    pub async fn unnull_ip(&self, server_id: &str, ip: &str) -> LeasewebResult<()> {
        let context = format!("unnulling server {server_id} IP {ip}");
        let url = self
            .api_client
            .endpoint(&["servers", server_id, "ips", ip, "unnull"])?;
        let request = ApiRequest::new(context, Method::POST, url, StatusCode::ACCEPTED);

        self.api_client.dispatch(request).await
    }
}
