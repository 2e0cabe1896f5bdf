use serde::Serialize;

use crate::error::PrtgError;
use crate::prtg::operation::PrtgOperation;
use crate::response::Status;

pub const INVALID_PAYLOAD_REASON: &str = "Invalid payload provided.";
pub const INSTANCE_UNREACHABLE_REASON: &str = "Could not reach the PRTG instance.";
pub const UNAUTHORIZED_REASON: &str = "You are not authorized to do this.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrtgOutcome {
    Success,
    InvalidPayload,
    InstanceUnreachable,
    Unauthorized,
    OperationFailed,
}

impl From<&Result<(), PrtgError>> for PrtgOutcome {
    fn from(result: &Result<(), PrtgError>) -> Self {
        match *result {
            Ok(()) => PrtgOutcome::Success,
            Err(PrtgError::InvalidPayload) => PrtgOutcome::InvalidPayload,
            Err(PrtgError::InstanceUnreachable(_)) => PrtgOutcome::InstanceUnreachable,
            Err(PrtgError::Unauthorized) => PrtgOutcome::Unauthorized,
            Err(PrtgError::OperationFailed(_)) => PrtgOutcome::OperationFailed,
        }
    }
}

impl PrtgOutcome {
    pub fn respond<O: PrtgOperation>(self) -> PrtgResponse {
        match self {
            PrtgOutcome::Success => PrtgResponse::new(Status::Success, O::SUCCESS_REASON, 200),
            PrtgOutcome::InvalidPayload => {
                PrtgResponse::new(Status::Failure, INVALID_PAYLOAD_REASON, 400)
            }
            PrtgOutcome::InstanceUnreachable => {
                PrtgResponse::new(Status::Failure, INSTANCE_UNREACHABLE_REASON, 400)
            }
            PrtgOutcome::Unauthorized => PrtgResponse::new(Status::Failure, UNAUTHORIZED_REASON, 401),
            PrtgOutcome::OperationFailed => {
                PrtgResponse::new(Status::Failure, O::FAILURE_REASON, 400)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrtgResponse {
    pub status: Status,
    pub reason: &'static str,
    pub status_code: u16,
}

impl PrtgResponse {
    fn new(status: Status, reason: &'static str, status_code: u16) -> Self {
        PrtgResponse {
            status,
            reason,
            status_code,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
