use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::LeasewebResult,
            model::catalog::{ControlPanel, ControlPanelList, OperatingSystem, OperatingSystemList},
        },
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Lists installable operating systems.
    ///
    /// Only the first page is read; with the API's default limit it holds the
    /// whole catalog.
    pub async fn operating_systems(&self) -> LeasewebResult<Vec<OperatingSystem>> {
        let url = self.api_client.endpoint(&["operatingSystems"])?;
        let request = ApiRequest::new("getting operating systems", Method::GET, url, StatusCode::OK);

        let list: OperatingSystemList = self.api_client.fetch(request).await?;
        Ok(list.operating_systems)
    }

    /// Lists control panels, optionally only those supported by one operating system.
    pub async fn control_panels(
        &self,
        operating_system_id: Option<&str>,
    ) -> LeasewebResult<Vec<ControlPanel>> {
        let url = self.api_client.endpoint(&["controlPanels"])?;
        let request = ApiRequest::new("getting control panels", Method::GET, url, StatusCode::OK)
            .query([(
                "operatingSystemId",
                operating_system_id
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
            )]);

        let list: ControlPanelList = self.api_client.fetch(request).await?;
        Ok(list.control_panels)
    }
}
