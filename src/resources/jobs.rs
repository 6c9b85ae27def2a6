use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::{LeasewebError, LeasewebResult},
            model::job::{Job, JobList, Payload},
        },
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Starts an installation on a server.
    ///
    /// The payload is sent as-is; its schema is validated by the API.
    pub async fn launch_installation_job(
        &self,
        server_id: &str,
        payload: &Payload,
    ) -> LeasewebResult<Job> {
        let context = format!("launching installation job for server {server_id}");
        let url = self.api_client.endpoint(&["servers", server_id, "install"])?;
        let request =
            ApiRequest::new(context, Method::POST, url, StatusCode::ACCEPTED).json(payload)?;

        self.api_client.fetch(request).await
    }

    /// Retrieves the most recent installation job of a server.
    ///
    /// # Errors
    /// Returns `LeasewebError::NotFound` if the server has never been installed through the API.
    pub async fn latest_installation_job(&self, server_id: &str) -> LeasewebResult<Job> {
        let context = format!("getting latest installation job for server {server_id}");
        let url = self.api_client.endpoint(&["servers", server_id, "jobs"])?;
        let request = ApiRequest::new(context.clone(), Method::GET, url, StatusCode::OK)
            .query([("type", Some("install".to_string()))]);

        let list: JobList = self.api_client.fetch(request).await?;
        list.jobs
            .into_iter()
            .next()
            .ok_or_else(|| LeasewebError::NotFound {
                context,
                message: "no installation job found".to_string(),
            })
    }

    /// Retrieves one job of a server by its UUID.
    pub async fn job(&self, server_id: &str, job_uuid: &str) -> LeasewebResult<Job> {
        let context = format!("getting job status for server {server_id}");
        let url = self
            .api_client
            .endpoint(&["servers", server_id, "jobs", job_uuid])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        self.api_client.fetch(request).await
    }
}
