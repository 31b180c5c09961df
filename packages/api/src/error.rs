//! Transport error taxonomy.
//!
//! Every failure coming out of [`crate::client::ApiClient`] is one of three
//! things: the server was unreachable, the server answered with a non-2xx
//! status, or the response could not be understood. Repositories translate
//! these into user-facing messages at their own boundary; a 401 is surfaced
//! (distinct messaging), never recovered — there is no token refresh.

use thiserror::Error;

/// A failed call against the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route to the server: DNS, connect, or timeout failure.
    #[error("couldn't reach the server")]
    Connectivity(#[source] reqwest::Error),

    /// Server reachable but answered non-2xx. The status is kept for
    /// 400/401/409-specific messaging.
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    /// Anything else: malformed body, missing payload.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Unexpected(err.to_string())
        } else {
            Self::Connectivity(err)
        }
    }
}
