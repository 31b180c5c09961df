//! The three-state result union crossing the presentation boundary.
//!
//! Repositories return `Result<T, RepoError>`; views wrap in-flight calls in
//! [`FetchState`] so a screen renders exactly one of loading / success /
//! error. This is the only state machine in the client.

use thiserror::Error;

pub(crate) const MSG_CONNECTION: &str = "Couldn't reach server, check your internet connection.";
pub(crate) const MSG_GENERIC: &str = "Oops, something went wrong!";
pub(crate) const MSG_UNKNOWN: &str = "Unknown error occurred";
pub(crate) const MSG_SESSION_EXPIRED: &str = "Your session has expired, please sign in again.";

/// A user-facing failure produced at a repository boundary.
///
/// Carries the message a screen should display and, when the server
/// answered, the HTTP status — so a 401 can route the user back to sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RepoError {
    message: String,
    status: Option<u16>,
}

impl RepoError {
    pub(crate) fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// Loading / Success / Error wrapper for one remote operation.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(RepoError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RepoError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, RepoError>> for FetchState<T> {
    fn from(result: Result<T, RepoError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err),
        }
    }
}
