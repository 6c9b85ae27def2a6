use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::LeasewebResult,
            model::network_interface::{NetworkInterfaceInfo, NetworkType},
        },
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Retrieves the switch port state of one network interface.
    pub async fn network_interface(
        &self,
        server_id: &str,
        network_type: NetworkType,
    ) -> LeasewebResult<NetworkInterfaceInfo> {
        let context = format!("getting server {server_id} network interface {network_type} info");
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "networkInterfaces",
            network_type.as_str(),
        ])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        self.api_client.fetch(request).await
    }

    /// Opens the switch port of a network interface.
    pub async fn open_network_interface(
        &self,
        server_id: &str,
        network_type: NetworkType,
    ) -> LeasewebResult<()> {
        self.switch_port(server_id, network_type, "open", "opening")
            .await
    }

    /// Closes the switch port of a network interface.
    pub async fn close_network_interface(
        &self,
        server_id: &str,
        network_type: NetworkType,
    ) -> LeasewebResult<()> {
        self.switch_port(server_id, network_type, "close", "closing")
            .await
    }

    async fn switch_port(
        &self,
        server_id: &str,
        network_type: NetworkType,
        action: &str,
        verb: &str,
    ) -> LeasewebResult<()> {
        let context = format!("{verb} server {server_id} network interface {network_type}");
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "networkInterfaces",
            network_type.as_str(),
            action,
        ])?;
        let request = ApiRequest::new(context, Method::POST, url, StatusCode::NO_CONTENT);

        self.api_client.dispatch(request).await
    }
}
