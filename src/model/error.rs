use std::fmt;

/// Failure of a single fetch. `Service` is attributable to the remote store,
/// `Client` to the local request or transport. Both are terminal, no retry.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchError {
    Service(String),
    Client(String),
}

impl FetchError {
    pub fn is_service(&self) -> bool {
        matches!(self, FetchError::Service(_))
    }

    pub fn is_client(&self) -> bool {
        matches!(self, FetchError::Client(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Service(message) => write!(f, "service error: {}", message),
            FetchError::Client(message) => write!(f, "client error: {}", message),
        }
    }
}
