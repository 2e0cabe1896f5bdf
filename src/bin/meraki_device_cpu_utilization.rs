use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};

use monitoring_adapters::config::Config;
use monitoring_adapters::event::raw_body;
use monitoring_adapters::logging;
use monitoring_adapters::meraki::{DashboardClient, MerakiHandler, MerakiResponse};
use monitoring_adapters::secret::Credential;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env();
    let credential = Credential::from_file(config.meraki_api_key_path())?;
    info!(base_url = %config.meraki_base_url, "loaded Meraki API key");

    let base_url = config.meraki_base_url;
    run(service_fn(move |event: LambdaEvent<Value>| {
        cpu_utilization_handler(credential.clone(), base_url.clone(), event)
    }))
    .await
}

async fn cpu_utilization_handler(
    credential: Credential,
    base_url: String,
    event: LambdaEvent<Value>,
) -> Result<MerakiResponse, Error> {
    let client = match DashboardClient::new(credential, base_url) {
        Ok(client) => client,
        Err(error) => {
            warn!(error = %error, "failed to build the Meraki client");
            return Ok(MerakiResponse::unexpected());
        }
    };
    let handler = MerakiHandler::new(client);
    Ok(handler.handle(&raw_body(&event.payload)).await)
}
