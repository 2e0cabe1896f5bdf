pub mod client;
pub mod handler;
pub mod operation;
pub mod payload;
pub mod request;
pub mod response;

pub use client::{HttpPrtgClient, PrtgApi};
pub use handler::PrtgHandler;
pub use operation::PrtgOperation;
pub use payload::{ChangeDeviceIpPayload, ObjectId, RenameObjectPayload};
pub use request::PrtgRequest;
pub use response::{PrtgOutcome, PrtgResponse};
