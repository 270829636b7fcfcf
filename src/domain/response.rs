use serde_json::Value;

use crate::domain::request::Options;

#[derive(Debug, Clone, PartialEq)]
/// Status code and decoded body of an SMSPortal reply.
///
/// Vendor error payloads arrive here too; a non-2xx status is not turned into
/// an error. A body that is not a JSON object decodes to an empty map.
pub struct ApiResponse {
    pub status: u16,
    pub body: Options,
}

impl ApiResponse {
    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Look up a top-level field of the body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    pub fn into_body(self) -> Options {
        self.body
    }
}
