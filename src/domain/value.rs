use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSPortal API client id.
///
/// Invariant: non-empty. The value is kept exactly as provided because it is
/// encoded verbatim into the Basic authorization header.
pub struct ApiId(String);

impl ApiId {
    /// Name used in error messages (`apiId`).
    pub const FIELD: &'static str = "apiId";
    /// Environment variable read by [`Credentials::from_env`].
    pub const ENV: &'static str = "SMSPORTAL_API_ID";

    /// Create a validated [`ApiId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the client id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMSPortal API secret.
///
/// Invariant: non-empty. `Debug` output is redacted.
pub struct ApiSecret(String);

impl ApiSecret {
    /// Name used in error messages (`apiSecret`).
    pub const FIELD: &'static str = "apiSecret";
    /// Environment variable read by [`Credentials::from_env`].
    pub const ENV: &'static str = "SMSPORTAL_API_SECRET";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Client id + secret pair used to obtain a session token.
pub struct Credentials {
    api_id: ApiId,
    api_secret: ApiSecret,
}

impl Credentials {
    /// Validate and pair an id with its secret.
    pub fn new(
        api_id: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_id: ApiId::new(api_id)?,
            api_secret: ApiSecret::new(api_secret)?,
        })
    }

    /// Read credentials from `SMSPORTAL_API_ID` and `SMSPORTAL_API_SECRET`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let api_id = lookup(ApiId::ENV).ok_or(ValidationError::MissingEnv { name: ApiId::ENV })?;
        let api_secret = lookup(ApiSecret::ENV).ok_or(ValidationError::MissingEnv {
            name: ApiSecret::ENV,
        })?;
        Self::new(api_id, api_secret)
    }

    /// Client id half of the pair.
    pub fn api_id(&self) -> &ApiId {
        &self.api_id
    }

    /// Secret half of the pair.
    pub fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// `Authorization` header value for the `Authentication` endpoint.
    pub fn basic_authorization(&self) -> String {
        let pair = format!("{}:{}", self.api_id.as_str(), self.api_secret.as_str());
        format!("Basic {}", STANDARD.encode(pair))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient phone number (`destination`), passed through unnormalized.
///
/// Invariant: non-empty after trimming.
pub struct Destination(String);

impl Destination {
    /// JSON field name used by SMSPortal (`destination`).
    pub const FIELD: &'static str = "destination";

    /// Create a validated destination; surrounding whitespace is removed.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS body (`content`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageContent(String);

impl MessageContent {
    /// JSON field name used by SMSPortal (`content`).
    pub const FIELD: &'static str = "content";

    /// Create validated message content.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
