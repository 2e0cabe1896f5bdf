use serde::de::DeserializeOwned;

use crate::prtg::payload::{ChangeDeviceIpPayload, RenameObjectPayload};
use crate::prtg::request::PrtgRequest;

/// One PRTG write operation: which payload it accepts, which endpoint it
/// calls, and what the caller is told about it.
pub trait PrtgOperation: DeserializeOwned {
    const NAME: &'static str;
    const KEYS: [&'static str; 4];
    const PATH: &'static str;
    const SUCCESS_REASON: &'static str;
    const FAILURE_REASON: &'static str;

    fn instance(&self) -> &str;

    fn into_params(self) -> Vec<(&'static str, String)>;

    fn into_request(self) -> PrtgRequest {
        let url = format!("{}{}", self.instance(), Self::PATH);
        PrtgRequest {
            url,
            params: self.into_params(),
        }
    }
}

impl PrtgOperation for ChangeDeviceIpPayload {
    const NAME: &'static str = "change_device_ip";
    const KEYS: [&'static str; 4] = [
        "prtg_instance",
        "prtg_api_key",
        "prtg_device_id",
        "new_device_ip",
    ];
    const PATH: &'static str = "/api/setobjectproperty.htm";
    const SUCCESS_REASON: &'static str = "Successfully changed the device's IP!";
    const FAILURE_REASON: &'static str = "PRTG was unable to change the device's IP.";

    fn instance(&self) -> &str {
        &self.prtg_instance
    }

    fn into_params(self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.prtg_device_id.to_string()),
            ("name", "host".to_string()),
            ("value", self.new_device_ip),
            ("apitoken", self.prtg_api_key),
        ]
    }
}

impl PrtgOperation for RenameObjectPayload {
    const NAME: &'static str = "rename_object";
    const KEYS: [&'static str; 4] = [
        "prtg_instance",
        "prtg_api_key",
        "prtg_object_id",
        "new_object_name",
    ];
    const PATH: &'static str = "/api/rename.htm";
    const SUCCESS_REASON: &'static str = "Successfully renamed the object!";
    const FAILURE_REASON: &'static str = "PRTG was unable to rename the object.";

    fn instance(&self) -> &str {
        &self.prtg_instance
    }

    fn into_params(self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.prtg_object_id.to_string()),
            ("value", self.new_object_name),
            ("apitoken", self.prtg_api_key),
        ]
    }
}
