use serde::Serialize;
use serde_json::{Number, Value};

use crate::response::Status;

pub const UNEXPECTED_RESPONSE_REASON: &str = "Unexpected response from the Meraki API";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MerakiResponse {
    Success {
        status: Status,
        cpu_usage: Option<Number>,
    },
    Failure {
        status: Status,
        reason: &'static str,
    },
}

impl MerakiResponse {
    pub fn success(cpu_usage: Option<Number>) -> Self {
        MerakiResponse::Success {
            status: Status::Success,
            cpu_usage,
        }
    }

    pub fn unexpected() -> Self {
        MerakiResponse::Failure {
            status: Status::Failure,
            reason: UNEXPECTED_RESPONSE_REASON,
        }
    }

    /// Reads `perfScore` out of an appliance performance reply. An empty or
    /// otherwise falsy reply counts as unexpected.
    pub fn from_performance(performance: &Value) -> Self {
        if !is_truthy(performance) {
            return MerakiResponse::unexpected();
        }
        let cpu_usage = match performance.get("perfScore") {
            Some(Value::Number(score)) => Some(score.clone()),
            _ => None,
        };
        MerakiResponse::success(cpu_usage)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match *value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(ref number) => number.as_f64().map_or(true, |number| number != 0.0),
        Value::String(ref text) => !text.is_empty(),
        Value::Array(ref items) => !items.is_empty(),
        Value::Object(ref fields) => !fields.is_empty(),
    }
}
