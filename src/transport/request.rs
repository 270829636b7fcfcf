use serde_json::{Value, json};

use crate::domain::Options;

const SEND_OPTIONS_FIELD: &str = "sendOptions";

/// Body for `BulkMessages`.
///
/// In test mode `sendOptions` is replaced by `{"testMode": true}`; any
/// caller-supplied `sendOptions` value is discarded, not merged.
pub fn encode_bulk_messages_body(mut options: Options, test_mode: bool) -> Value {
    if test_mode {
        options.insert(SEND_OPTIONS_FIELD.to_owned(), json!({ "testMode": true }));
    }
    Value::Object(options)
}

/// Body for `GroupMessages`. Test mode is not applied here.
pub fn encode_group_messages_body(options: Options) -> Value {
    Value::Object(options)
}
