//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{BulkMessages, Message, Options};
pub use response::ApiResponse;
pub use validation::ValidationError;
pub use value::{ApiId, ApiSecret, Credentials, Destination, MessageContent};
