use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::LeasewebResult,
            model::server::{Server, ServerList},
        },
        infrastructure::api_client::ApiRequest,
    },
    resources::pagination::{DEFAULT_PAGE_SIZE, collect_pages},
};
use reqwest::{Method, StatusCode};
use serde::Serialize;

#[derive(Serialize)]
struct ReferenceUpdate<'a> {
    reference: &'a str,
}

impl LeasewebClient {
    /// Retrieves a single server.
    ///
    /// Public and remote management addresses are returned without their
    /// prefix length (`85.17.0.12/28` becomes `85.17.0.12`).
    pub async fn server(&self, server_id: &str) -> LeasewebResult<Server> {
        let context = format!("getting server {server_id}");
        let url = self.api_client.endpoint(&["servers", server_id])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        let server: Server = self.api_client.fetch(request).await?;
        Ok(server.strip_prefix_lengths())
    }

    /// Retrieves one page of servers.
    ///
    /// `offset` and `limit` are omitted from the query when `None`; so is
    /// `site` when `None` or empty.
    pub async fn servers_batch(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
        site: Option<&str>,
    ) -> LeasewebResult<Vec<Server>> {
        let url = self.api_client.endpoint(&["servers"])?;
        let request = ApiRequest::new("getting servers list", Method::GET, url, StatusCode::OK)
            .query([
                ("offset", offset.map(|o| o.to_string())),
                ("limit", limit.map(|l| l.to_string())),
                ("site", site.filter(|s| !s.is_empty()).map(str::to_string)),
            ]);

        let list: ServerList = self.api_client.fetch(request).await?;
        Ok(list
            .servers
            .into_iter()
            .map(Server::strip_prefix_lengths)
            .collect())
    }

    /// Retrieves every server, optionally restricted to one site, in API order.
    ///
    /// Pages of [`DEFAULT_PAGE_SIZE`] are requested until an empty page comes back.
    pub async fn all_servers(&self, site: Option<&str>) -> LeasewebResult<Vec<Server>> {
        collect_pages(DEFAULT_PAGE_SIZE, move |page| {
            self.servers_batch(Some(page.offset), Some(page.limit), site)
        })
        .await
    }

    /// Sets the customer reference of a server.
    pub async fn update_server_reference(
        &self,
        server_id: &str,
        reference: &str,
    ) -> LeasewebResult<()> {
        let context = format!("updating server {server_id} reference");
        let url = self.api_client.endpoint(&["servers", server_id])?;
        let request = ApiRequest::new(context, Method::PUT, url, StatusCode::NO_CONTENT)
            .json(&ReferenceUpdate { reference })?;

        self.api_client.dispatch(request).await
    }
}
