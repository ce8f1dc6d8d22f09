use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RestqError {
    /// Flag combination rejected before any I/O.
    InvalidInput {
        reason: String,
    },
    Read {
        path: String,
        reason: String,
    },
    Parse {
        path: String,
        reason: String,
    },
    /// Queue identifier cannot form a valid target address.
    Address {
        queue: String,
        reason: String,
    },
    Transport {
        context: String,
        reason: String,
    },
    /// Remote service answered with a status the operation does not accept.
    Service {
        operation: String,
        status: u16,
    },
}

impl fmt::Display for RestqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestqError::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
            RestqError::Read { path, reason } => {
                write!(f, "Failed to read '{path}': {reason}")
            }
            RestqError::Parse { path, reason } => {
                write!(f, "Failed to parse queue file '{path}': {reason}")
            }
            RestqError::Address { queue, reason } => {
                write!(f, "Invalid queue address '{queue}': {reason}")
            }
            RestqError::Transport { context, reason } => {
                write!(f, "Transport error in {context}: {reason}")
            }
            RestqError::Service { operation, status } => {
                write!(f, "Service error on {operation}: unexpected status {status}")
            }
        }
    }
}

impl std::error::Error for RestqError {}

impl RestqError {
    pub fn invalid_input(reason: &str) -> Self {
        RestqError::InvalidInput {
            reason: reason.to_string(),
        }
    }

    pub fn from_io_error(e: std::io::Error, path: &str) -> Self {
        RestqError::Read {
            path: path.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_parse_error(e: impl fmt::Display, path: &str) -> Self {
        RestqError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_transport_error(e: reqwest::Error, context: &str) -> Self {
        RestqError::Transport {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn service(operation: &str, status: u16) -> Self {
        RestqError::Service {
            operation: operation.to_string(),
            status,
        }
    }

    /// HTTP status received from the service, if the failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RestqError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for failures detected before a request reached the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RestqError::InvalidInput { .. }
                | RestqError::Read { .. }
                | RestqError::Parse { .. }
                | RestqError::Address { .. }
        )
    }
}
