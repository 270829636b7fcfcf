use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingEnv { name: &'static str },
    InvalidBaseUri { input: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingEnv { name } => {
                write!(f, "{name} environment variable is required")
            }
            Self::InvalidBaseUri { input, reason } => {
                write!(f, "invalid base URI {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
