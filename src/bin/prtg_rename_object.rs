use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use monitoring_adapters::event::raw_body;
use monitoring_adapters::logging;
use monitoring_adapters::prtg::{HttpPrtgClient, PrtgHandler, PrtgResponse, RenameObjectPayload};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    run(service_fn(rename_object_handler)).await
}

async fn rename_object_handler(event: LambdaEvent<Value>) -> Result<PrtgResponse, Error> {
    let handler = PrtgHandler::new(HttpPrtgClient::new());
    Ok(handler
        .handle::<RenameObjectPayload>(&raw_body(&event.payload))
        .await)
}
