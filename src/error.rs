use std::error::Error;

use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PrtgError {
    InvalidPayload,
    InstanceUnreachable(reqwest::Error),
    Unauthorized,
    OperationFailed(u16),
}

impl Display for PrtgError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            PrtgError::InvalidPayload => write!(f, "Payload is not a valid PRTG request"),
            PrtgError::InstanceUnreachable(ref error) => {
                write!(f, "Failed to reach the PRTG instance: ")?;
                std::fmt::Display::fmt(error, f)
            }
            PrtgError::Unauthorized => write!(f, "PRTG rejected the API token"),
            PrtgError::OperationFailed(status) => {
                write!(f, "PRTG declined the operation with status {}", status)
            }
        }
    }
}

impl Error for PrtgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            PrtgError::InstanceUnreachable(ref error) => Some(error),
            _ => None,
        }
    }
}

// the request URL carries the apitoken query parameter
impl From<reqwest::Error> for PrtgError {
    fn from(e: reqwest::Error) -> PrtgError {
        PrtgError::InstanceUnreachable(e.without_url())
    }
}

impl From<serde_json::Error> for PrtgError {
    fn from(_: serde_json::Error) -> PrtgError {
        PrtgError::InvalidPayload
    }
}

#[derive(Debug)]
pub enum MerakiError {
    EmptySerial,
    InvalidBaseUrl(String),
    InvalidRedirect(String),
    TooManyRedirects,
    Transport(reqwest::Error),
    Status(u16),
    Decode(serde_json::Error),
}

impl Display for MerakiError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            MerakiError::EmptySerial => write!(f, "Serial number is empty"),
            MerakiError::InvalidBaseUrl(ref url) => write!(f, "Invalid Meraki base URL: {}", url),
            MerakiError::InvalidRedirect(ref error) => {
                write!(f, "Invalid redirect from the Meraki API: {}", error)
            }
            MerakiError::TooManyRedirects => write!(f, "Too many redirects from the Meraki API"),
            MerakiError::Transport(ref error) => std::fmt::Display::fmt(error, f),
            MerakiError::Status(status) => {
                write!(f, "Meraki API answered with status {}", status)
            }
            MerakiError::Decode(ref error) => {
                write!(f, "Failed to decode the Meraki response: ")?;
                std::fmt::Display::fmt(error, f)
            }
        }
    }
}

impl Error for MerakiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            MerakiError::Transport(ref error) => Some(error),
            MerakiError::Decode(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MerakiError {
    fn from(e: reqwest::Error) -> MerakiError {
        MerakiError::Transport(e)
    }
}

impl From<serde_json::Error> for MerakiError {
    fn from(e: serde_json::Error) -> MerakiError {
        MerakiError::Decode(e)
    }
}
