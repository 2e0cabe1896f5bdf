use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::PrtgError;
use crate::prtg::request::PrtgRequest;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrtgApi: Send + Sync {
    async fn dispatch(&self, request: &PrtgRequest) -> Result<(), PrtgError>;
}

pub struct HttpPrtgClient {
    client: reqwest::Client,
}

impl Default for HttpPrtgClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPrtgClient {
    pub fn new() -> Self {
        HttpPrtgClient::new_with_client(reqwest::Client::new())
    }

    pub fn new_with_client(client: reqwest::Client) -> Self {
        HttpPrtgClient { client }
    }
}

#[async_trait]
impl PrtgApi for HttpPrtgClient {
    async fn dispatch(&self, request: &PrtgRequest) -> Result<(), PrtgError> {
        let response = self
            .client
            .get(&request.url)
            .query(&request.params)
            .send()
            .await?;
        check_status(response.status())
    }
}

pub fn check_status(status: StatusCode) -> Result<(), PrtgError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::UNAUTHORIZED => Err(PrtgError::Unauthorized),
        other => Err(PrtgError::OperationFailed(other.as_u16())),
    }
}
