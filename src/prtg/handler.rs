use tracing::{debug, info, warn};

use crate::error::PrtgError;
use crate::prtg::client::PrtgApi;
use crate::prtg::operation::PrtgOperation;
use crate::prtg::payload::parse_payload;
use crate::prtg::response::{PrtgOutcome, PrtgResponse};

pub struct PrtgHandler<C> {
    client: C,
}

impl<C: PrtgApi> PrtgHandler<C> {
    pub fn new(client: C) -> Self {
        PrtgHandler { client }
    }

    /// Runs operation `O` for one raw request body. Every outcome, including
    /// a malformed body or an unreachable instance, ends in a response.
    pub async fn handle<O: PrtgOperation>(&self, raw: &str) -> PrtgResponse {
        let result = self.execute::<O>(raw).await;
        match result {
            Ok(()) => info!(operation = O::NAME, "PRTG accepted the request"),
            Err(PrtgError::InvalidPayload) => warn!(operation = O::NAME, "rejected payload"),
            Err(ref error) => warn!(operation = O::NAME, error = %error, "PRTG request failed"),
        }
        PrtgOutcome::from(&result).respond::<O>()
    }

    async fn execute<O: PrtgOperation>(&self, raw: &str) -> Result<(), PrtgError> {
        let payload = parse_payload::<O>(raw)?;
        let request = payload.into_request();
        debug!(operation = O::NAME, url = %request.url, "sending request to PRTG");
        self.client.dispatch(&request).await
    }
}
