use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::LeasewebResult,
            model::credential::{Credential, PasswordUpdate},
        },
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Stores a new credential for a server.
    pub async fn create_credential(
        &self,
        server_id: &str,
        credential: &Credential,
    ) -> LeasewebResult<Credential> {
        let context = format!(
            "creating server {server_id} credential {}",
            credential.credential_type
        );
        let url = self
            .api_client
            .endpoint(&["servers", server_id, "credentials"])?;
        let request =
            ApiRequest::new(context, Method::POST, url, StatusCode::OK).json(credential)?;

        self.api_client.fetch(request).await
    }

    /// Retrieves a credential by its type and username.
    pub async fn credential(
        &self,
        server_id: &str,
        credential_type: &str,
        username: &str,
    ) -> LeasewebResult<Credential> {
        let context = format!("getting server {server_id} credential {credential_type}");
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "credentials",
            credential_type,
            username,
        ])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        self.api_client.fetch(request).await
    }

    /// Changes the password of a credential.
    ///
    /// Type and username only address the credential; the body carries the
    /// password alone.
    pub async fn update_credential(
        &self,
        server_id: &str,
        credential: &Credential,
    ) -> LeasewebResult<Credential> {
        let context = format!(
            "updating server {server_id} credential {}",
            credential.credential_type
        );
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "credentials",
            credential.credential_type.as_str(),
            credential.username.as_str(),
        ])?;
        let request = ApiRequest::new(context, Method::PUT, url, StatusCode::OK).json(
            &PasswordUpdate {
                password: &credential.password,
            },
        )?;

        self.api_client.fetch(request).await
    }

    /// Deletes a credential, addressed by its type and username.
    pub async fn delete_credential(
        &self,
        server_id: &str,
        credential: &Credential,
    ) -> LeasewebResult<()> {
        let context = format!(
            "deleting server {server_id} credential {}",
            credential.credential_type
        );
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "credentials",
            credential.credential_type.as_str(),
            credential.username.as_str(),
        ])?;
        let request = ApiRequest::new(context, Method::DELETE, url, StatusCode::NO_CONTENT);

        self.api_client.dispatch(request).await
    }
}
