use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;
use crate::domain::value::{Destination, MessageContent};

/// Free-form request body for `BulkMessages` / `GroupMessages`.
///
/// The client does not validate its contents; see the SMSPortal reference for
/// the accepted keys.
pub type Options = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of a bulk send.
pub struct Message {
    destination: Destination,
    content: MessageContent,
}

impl Message {
    pub fn new(
        destination: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            destination: Destination::new(destination)?,
            content: MessageContent::new(content)?,
        })
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed builder for the `{"messages": [...]}` body of `BulkMessages`.
///
/// Convert into [`Options`] to send it; extra keys can be added afterwards.
pub struct BulkMessages {
    messages: Vec<Message>,
}

impl BulkMessages {
    /// JSON field name used by SMSPortal (`messages`).
    pub const FIELD: &'static str = "messages";

    pub fn new(messages: Vec<Message>) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self { messages })
    }

    /// Same content sent to every destination.
    pub fn broadcast<I, S>(destinations: I, content: impl Into<String>) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let content = MessageContent::new(content)?;
        let messages = destinations
            .into_iter()
            .map(|destination| {
                Ok(Message {
                    destination: Destination::new(destination)?,
                    content: content.clone(),
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Self::new(messages)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl From<BulkMessages> for Options {
    fn from(value: BulkMessages) -> Self {
        let messages = value
            .messages
            .into_iter()
            .map(|message| {
                let mut entry = Map::new();
                entry.insert(
                    MessageContent::FIELD.to_owned(),
                    Value::String(message.content.into_string()),
                );
                entry.insert(
                    Destination::FIELD.to_owned(),
                    Value::String(message.destination.into_string()),
                );
                Value::Object(entry)
            })
            .collect::<Vec<_>>();

        let mut options = Options::new();
        options.insert(BulkMessages::FIELD.to_owned(), Value::Array(messages));
        options
    }
}
