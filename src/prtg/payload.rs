use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::error::PrtgError;
use crate::prtg::operation::PrtgOperation;

/// PRTG object IDs arrive either as JSON strings or numbers and are forwarded
/// exactly as given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Number(serde_json::Number),
    Text(String),
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ObjectId::Number(ref number) => Display::fmt(number, f),
            ObjectId::Text(ref text) => f.write_str(text),
        }
    }
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeDeviceIpPayload {
    pub prtg_instance: String,
    pub prtg_api_key: String,
    pub prtg_device_id: ObjectId,
    pub new_device_ip: String,
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenameObjectPayload {
    pub prtg_instance: String,
    pub prtg_api_key: String,
    pub prtg_object_id: ObjectId,
    pub new_object_name: String,
}

/// Parses a raw request body into the payload of operation `O`.
///
/// The body must be a JSON object holding exactly the operation's four keys.
/// A wrong key count and a wrong key name are rejected the same way.
pub fn parse_payload<O: PrtgOperation>(raw: &str) -> Result<O, PrtgError> {
    let data = match serde_json::from_str::<Value>(raw)? {
        Value::Object(data) => data,
        _ => return Err(PrtgError::InvalidPayload),
    };

    let has_valid_keys = O::KEYS.iter().all(|key| data.contains_key(*key));
    if data.len() != O::KEYS.len() || !has_valid_keys {
        return Err(PrtgError::InvalidPayload);
    }

    Ok(serde_json::from_value(Value::Object(data))?)
}

#[cfg(test)]
mod tests {
    use crate::error::PrtgError;
    use crate::prtg::payload::{parse_payload, ChangeDeviceIpPayload, ObjectId, RenameObjectPayload};
    use serde_json::json;

    fn valid_change_ip() -> serde_json::Value {
        json!({
            "prtg_instance": "https://x",
            "prtg_api_key": "k",
            "prtg_device_id": "40",
            "new_device_ip": "127.0.0.1"
        })
    }

    fn is_invalid<T>(result: Result<T, PrtgError>) -> bool {
        matches!(result, Err(PrtgError::InvalidPayload))
    }

    #[test]
    fn test_parse_valid_payload() {
        let payload = parse_payload::<ChangeDeviceIpPayload>(&valid_change_ip().to_string()).unwrap();
        assert_eq!(payload.prtg_instance, "https://x");
        assert_eq!(payload.prtg_api_key, "k");
        assert_eq!(payload.prtg_device_id, ObjectId::Text("40".to_string()));
        assert_eq!(payload.new_device_ip, "127.0.0.1");
    }

    #[test]
    fn test_numeric_id_is_kept() {
        let raw = json!({
            "prtg_instance": "https://x",
            "prtg_api_key": "k",
            "prtg_object_id": 2041,
            "new_object_name": "Core switch"
        });
        let payload = parse_payload::<RenameObjectPayload>(&raw.to_string()).unwrap();
        assert_eq!(payload.prtg_object_id, ObjectId::Number(serde_json::Number::from(2041u64)));
        assert_eq!(payload.prtg_object_id.to_string(), "2041");
    }

    #[test]
    fn test_not_a_dictionary() {
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>("Not a dictionary!")));
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>("")));
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>("1")));
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>("\"text\"")));
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>("[1, 2, 3, 4]")));
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>("null")));
    }

    #[test]
    fn test_wrong_key_counts() {
        let mut three = valid_change_ip();
        three.as_object_mut().unwrap().remove("prtg_api_key");

        let mut five = valid_change_ip();
        five.as_object_mut().unwrap().insert("five".to_string(), json!(5));

        for raw in vec![
            json!({}),
            json!({"one": 1}),
            three,
            five,
            json!({"one": 1, "two": 2, "three": 3, "four": 4, "five": 5}),
        ] {
            assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>(&raw.to_string())));
        }
    }

    #[test]
    fn test_substituted_key() {
        let mut raw = valid_change_ip();
        let data = raw.as_object_mut().unwrap();
        data.remove("prtg_device_id");
        data.insert("prtg_object_id".to_string(), json!("40"));
        assert_eq!(data.len(), 4);

        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>(&raw.to_string())));
    }

    #[test]
    fn test_change_ip_payload_is_not_a_rename_payload() {
        assert!(is_invalid(parse_payload::<RenameObjectPayload>(&valid_change_ip().to_string())));
    }

    #[test]
    fn test_wrong_value_types() {
        let mut raw = valid_change_ip();
        raw["new_device_ip"] = json!(null);
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>(&raw.to_string())));

        let mut raw = valid_change_ip();
        raw["prtg_device_id"] = json!({"id": 40});
        assert!(is_invalid(parse_payload::<ChangeDeviceIpPayload>(&raw.to_string())));
    }
}
