use serde_json::Value;
use tracing::{info, warn};

use crate::error::MerakiError;
use crate::meraki::client::MerakiApi;
use crate::meraki::response::MerakiResponse;

pub struct MerakiHandler<C> {
    client: C,
}

impl<C: MerakiApi> MerakiHandler<C> {
    pub fn new(client: C) -> Self {
        MerakiHandler { client }
    }

    /// Looks up the CPU usage of the appliance with the given serial number.
    /// API failures are logged and reported as an unexpected response.
    pub async fn handle(&self, serial: &str) -> MerakiResponse {
        match self.fetch(serial.trim()).await {
            Ok(performance) => {
                let response = MerakiResponse::from_performance(&performance);
                info!(serial = serial.trim(), response = ?response, "Meraki performance read");
                response
            }
            Err(error) => {
                warn!(serial = serial.trim(), error = %error, "Meraki performance read failed");
                MerakiResponse::unexpected()
            }
        }
    }

    async fn fetch(&self, serial: &str) -> Result<Value, MerakiError> {
        if serial.is_empty() {
            return Err(MerakiError::EmptySerial);
        }
        self.client.get_device_appliance_performance(serial).await
    }
}
