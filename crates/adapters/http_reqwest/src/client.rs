//! [`DeviceApi`] implementation backed by `reqwest`.

use reqwest::header::CONTENT_TYPE;

use wraphmi_app::ports::DeviceApi;
use wraphmi_domain::command::Command;
use wraphmi_domain::error::SyncError;
use wraphmi_domain::snapshot::StatusSnapshot;

use crate::config::HttpConfig;
use crate::error::HttpError;

/// Polling transport talking to the device's HTTP server.
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    client: reqwest::Client,
    status_url: String,
    command_url: String,
}

impl HttpDeviceApi {
    /// Build a client for the configured device.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the underlying HTTP client cannot be
    /// initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(HttpError::Build)?;
        Ok(Self {
            client,
            status_url: config.status_url(),
            command_url: config.command_url(),
        })
    }

    async fn get_status(&self) -> Result<StatusSnapshot, HttpError> {
        let resp = self
            .client
            .get(&self.status_url)
            .send()
            .await
            .map_err(HttpError::Request)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(HttpError::Status(status.as_u16()));
        }
        let body = resp.text().await.map_err(HttpError::Request)?;
        serde_json::from_str(&body).map_err(HttpError::Decode)
    }

    async fn post_command(&self, command: &Command) -> Result<(), HttpError> {
        let body = command.to_json().map_err(HttpError::Encode)?;
        let resp = self
            .client
            .post(&self.command_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(HttpError::Request)?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(HttpError::Status(status.as_u16()))
        }
    }
}

impl DeviceApi for HttpDeviceApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot, SyncError> {
        let snapshot = self.get_status().await.inspect_err(|err| {
            tracing::debug!(%err, url = %self.status_url, "status request failed");
        })?;
        Ok(snapshot)
    }

    async fn send_command(&self, command: &Command) -> Result<(), SyncError> {
        tracing::debug!(%command, url = %self.command_url, "posting command");
        self.post_command(command).await?;
        Ok(())
    }
}
