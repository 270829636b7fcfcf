use std::collections::HashMap;

use serde_json::Value;
use serde_json::value::RawValue;
use tracing::warn;

use super::money::TransportMoney;
use crate::domain::Options;

const TOKEN_FIELD: &str = "token";
const BALANCE_FIELD: &str = "balance";

/// Decode a reply body into a JSON object map.
///
/// Anything that is not a JSON object (invalid JSON, arrays, scalars, empty
/// bodies) decodes to an empty map.
pub fn decode_body(json: &str) -> Options {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(body)) => body,
        Ok(other) => {
            warn!(kind = json_kind(&other), "response body is not a JSON object");
            Options::new()
        }
        Err(err) => {
            warn!(error = %err, "response body is not valid JSON");
            Options::new()
        }
    }
}

/// Extract the session token from an `Authentication` reply.
pub fn decode_token(json: &str) -> Option<String> {
    decode_body(json)
        .remove(TOKEN_FIELD)
        .and_then(|token| match token {
            Value::String(token) => Some(token),
            _ => None,
        })
}

/// Extract the `balance` field from a `Balance` reply, keeping numbers verbatim.
pub fn decode_balance(json: &str) -> Option<String> {
    let fields = match serde_json::from_str::<HashMap<String, Box<RawValue>>>(json) {
        Ok(fields) => fields,
        Err(err) => {
            warn!(error = %err, "balance response is not a JSON object");
            return None;
        }
    };

    let raw = fields.get(BALANCE_FIELD)?;
    match serde_json::from_str::<TransportMoney>(raw.get()) {
        Ok(money) => Some(money.into_string()),
        Err(err) => {
            warn!(error = %err, "balance field has an unexpected type");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
