pub mod client;
pub mod handler;
pub mod response;

pub use client::{DashboardClient, MerakiApi};
pub use handler::MerakiHandler;
pub use response::MerakiResponse;
