use crate::{
    LeasewebClient,
    core::{
        domain::{
            error::LeasewebResult,
            model::notification_setting::{NotificationSetting, NotificationType},
        },
        infrastructure::api_client::ApiRequest,
    },
};
use reqwest::{Method, StatusCode};

impl LeasewebClient {
    /// Creates a notification setting and returns it with its assigned id.
    pub async fn create_notification_setting(
        &self,
        server_id: &str,
        notification_type: NotificationType,
        setting: &NotificationSetting,
    ) -> LeasewebResult<NotificationSetting> {
        let context =
            format!("creating server {server_id} notification setting {notification_type}");
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "notificationSettings",
            notification_type.as_str(),
        ])?;
        let request =
            ApiRequest::new(context, Method::POST, url, StatusCode::CREATED).json(setting)?;

        self.api_client.fetch(request).await
    }

    /// Retrieves one notification setting by its id.
    pub async fn notification_setting(
        &self,
        server_id: &str,
        notification_type: NotificationType,
        setting_id: &str,
    ) -> LeasewebResult<NotificationSetting> {
        let context =
            format!("getting server {server_id} notification setting {notification_type}");
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "notificationSettings",
            notification_type.as_str(),
            setting_id,
        ])?;
        let request = ApiRequest::new(context, Method::GET, url, StatusCode::OK);

        self.api_client.fetch(request).await
    }

    /// Replaces a notification setting and returns the stored version.
    pub async fn update_notification_setting(
        &self,
        server_id: &str,
        notification_type: NotificationType,
        setting_id: &str,
        setting: &NotificationSetting,
    ) -> LeasewebResult<NotificationSetting> {
        let context =
            format!("updating server {server_id} notification setting {notification_type}");
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "notificationSettings",
            notification_type.as_str(),
            setting_id,
        ])?;
        let request = ApiRequest::new(context, Method::PUT, url, StatusCode::OK).json(setting)?;

        self.api_client.fetch(request).await
    }

    /// Deletes a notification setting.
    pub async fn delete_notification_setting(
        &self,
        server_id: &str,
        notification_type: NotificationType,
        setting_id: &str,
    ) -> LeasewebResult<()> {
        let context =
            format!("deleting server {server_id} notification setting {notification_type}");
        let url = self.api_client.endpoint(&[
            "servers",
            server_id,
            "notificationSettings",
            notification_type.as_str(),
            setting_id,
        ])?;
        let request = ApiRequest::new(context, Method::DELETE, url, StatusCode::NO_CONTENT);

        self.api_client.dispatch(request).await
    }
}
