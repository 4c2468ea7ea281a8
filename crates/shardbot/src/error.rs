use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq)]
pub enum ShardbotError {
    Decode(DecodeError),
    InvalidShardCount {
        token: String,
        source: ParseIntError,
    },
    UnsupportedSubcommand {
        name: String,
    },
    InvalidArn {
        arn: String,
    },
    UnsupportedCommand {
        command: String,
    },
    Service(ServiceError),
}

/// Malformed `application/x-www-form-urlencoded` input.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    Semicolon { segment: String },
    InvalidEscape { escape: String },
    InvalidUtf8 { field: String },
    BodyNotUtf8 { valid_up_to: usize },
}

/// Failure reported by the stream administration collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError {
    pub operation: &'static str,
    pub message: String,
}

impl ServiceError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for ShardbotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShardbotError::Decode(err) => write!(f, "{err}"),
            ShardbotError::InvalidShardCount { token, source } => {
                write!(f, "parsing '{token}': {source}")
            }
            ShardbotError::UnsupportedSubcommand { name } => {
                write!(f, "'{name}' is not a valid command.")
            }
            ShardbotError::InvalidArn { arn } => write!(f, "'{arn}' is not a valid ARN."),
            ShardbotError::UnsupportedCommand { .. } => write!(f, "unsupported command."),
            ShardbotError::Service(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Semicolon { segment } => {
                write!(f, "invalid semicolon separator in form field '{segment}'")
            }
            DecodeError::InvalidEscape { escape } => {
                write!(f, "invalid URL escape \"{escape}\"")
            }
            DecodeError::InvalidUtf8 { field } => {
                write!(f, "form field '{field}' is not valid UTF-8")
            }
            DecodeError::BodyNotUtf8 { valid_up_to } => {
                write!(
                    f,
                    "request body is not valid UTF-8 (invalid byte at offset {valid_up_to})"
                )
            }
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ShardbotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShardbotError::Decode(err) => Some(err),
            ShardbotError::InvalidShardCount { source, .. } => Some(source),
            ShardbotError::Service(err) => Some(err),
            _ => None,
        }
    }
}
impl std::error::Error for DecodeError {}
impl std::error::Error for ServiceError {}

impl ShardbotError {
    /// True when the request itself was at fault, as opposed to the collaborator.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ShardbotError::Service(_))
    }
}

impl From<DecodeError> for ShardbotError {
    fn from(err: DecodeError) -> Self {
        ShardbotError::Decode(err)
    }
}

impl From<ServiceError> for ShardbotError {
    fn from(err: ServiceError) -> Self {
        ShardbotError::Service(err)
    }
}
