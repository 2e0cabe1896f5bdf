use serde_json::Value;

/// Recovers the raw request body from a runtime event.
///
/// A JSON string event is the body itself. An API Gateway or function URL
/// event (an object with `requestContext` and a string `body`) yields that
/// `body`. Anything else is a direct invocation and is re-encoded so
/// validation sees it as sent.
pub fn raw_body(event: &Value) -> String {
    if let Some(body) = proxied_body(event) {
        return body.to_string();
    }
    match event {
        Value::String(body) => body.clone(),
        other => other.to_string(),
    }
}

fn proxied_body(event: &Value) -> Option<&str> {
    let fields = event.as_object()?;
    if !fields.contains_key("requestContext") {
        return None;
    }
    fields.get("body")?.as_str()
}
