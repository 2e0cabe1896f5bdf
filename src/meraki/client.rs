use async_trait::async_trait;
use reqwest::header::{ACCEPT, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Response, Url};
use serde_json::Value;
use tracing::debug;

use crate::error::MerakiError;
use crate::secret::Credential;

const MAX_REDIRECTS: usize = 10;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerakiApi: Send + Sync {
    async fn get_device_appliance_performance(&self, serial: &str) -> Result<Value, MerakiError>;
}

pub struct DashboardClient {
    client: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl DashboardClient {
    pub fn new(credential: Credential, base_url: impl Into<String>) -> Result<Self, MerakiError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;
        Ok(DashboardClient::new_with_client(client, credential, base_url))
    }

    /// `client` must be built with `Policy::none()`. Redirects are followed
    /// here so the bearer header also reaches shard hosts.
    pub fn new_with_client(
        client: reqwest::Client,
        credential: Credential,
        base_url: impl Into<String>,
    ) -> Self {
        DashboardClient {
            client,
            base_url: base_url.into(),
            credential,
        }
    }

    fn performance_url(&self, serial: &str) -> Result<Url, MerakiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|error| MerakiError::InvalidBaseUrl(error.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| MerakiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(&["devices", serial, "appliance", "performance"]);
        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<Response, MerakiError> {
        Ok(self
            .client
            .get(url)
            .bearer_auth(self.credential.expose())
            .header(ACCEPT, "application/json")
            .send()
            .await?)
    }

    async fn follow_redirects(&self, mut url: Url) -> Result<Response, MerakiError> {
        for _ in 0..MAX_REDIRECTS {
            let response = self.send(url.clone()).await?;
            if !response.status().is_redirection() {
                return Ok(response);
            }
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|location| location.to_str().ok())
                .ok_or_else(|| MerakiError::Status(response.status().as_u16()))?;
            url = url
                .join(location)
                .map_err(|error| MerakiError::InvalidRedirect(error.to_string()))?;
            debug!(host = url.host_str().unwrap_or_default(), "following Meraki redirect");
        }
        Err(MerakiError::TooManyRedirects)
    }
}

#[async_trait]
impl MerakiApi for DashboardClient {
    async fn get_device_appliance_performance(&self, serial: &str) -> Result<Value, MerakiError> {
        let response = self.follow_redirects(self.performance_url(serial)?).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MerakiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
