//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod money;
mod request;
mod response;

pub use request::{encode_bulk_messages_body, encode_group_messages_body};
pub use response::{decode_balance, decode_body, decode_token};
