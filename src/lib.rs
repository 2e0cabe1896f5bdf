pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod meraki;
pub mod prtg;
pub mod response;
pub mod secret;

#[cfg(test)]
mod test_support;
