use crate::{
    LeasewebClient,
    core::{
        domain::{error::LeasewebResult, model::power_info::PowerInfo},
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Retrieves the IPMI and PDU power status of a server.
    pub async fn power_info(&self, server_id: &str) -> LeasewebResult<PowerInfo> {
        let context = format!("getting server {server_id} power info");
        let url = self
            .api_client
            .endpoint(&["servers", server_id, "powerInfo"])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        self.api_client.fetch(request).await
    }

    /// Powers a server on. The API processes the request asynchronously.
    pub async fn power_on(&self, server_id: &str) -> LeasewebResult<()> {
        self.power_action(server_id, "powerOn", "powering on").await
    }

    /// Powers a server off. The API processes the request asynchronously.
    pub async fn power_off(&self, server_id: &str) -> LeasewebResult<()> {
        self.power_action(server_id, "powerOff", "powering off").await
    }

    async fn power_action(&self, server_id: &str, action: &str, verb: &str) -> LeasewebResult<()> {
        let context = format!("{verb} server {server_id}");
        let url = self.api_client.endpoint(&["servers", server_id, action])?;
        let request = ApiRequest::new(context, Method::POST, url, StatusCode::ACCEPTED);

        self.api_client.dispatch(request).await
    }
}
