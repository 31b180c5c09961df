//! # Repository façades
//!
//! One façade per domain — [`AuthRepository`], [`ReviewsRepository`],
//! [`ImageRepository`] — each owning an [`ApiClient`](crate::ApiClient) and a
//! [`SessionStore`](store::SessionStore) handle. Every operation invokes the
//! transport call and converts the outcome at its own boundary: success wraps
//! the payload, failure becomes a [`RepoError`](crate::RepoError) carrying
//! the exact message a screen should show. Nothing rethrows a raw transport
//! error to the UI.

mod auth;
mod images;
mod reviews;

pub use auth::AuthRepository;
pub use images::ImageRepository;
pub use reviews::ReviewsRepository;

use crate::error::ApiError;
use crate::result::{RepoError, MSG_CONNECTION, MSG_GENERIC, MSG_SESSION_EXPIRED, MSG_UNKNOWN};

/// Mapping for calls made on behalf of a signed-in user: a 401 means the
/// session is no longer valid, which gets its own message (never the
/// generic one).
pub(crate) fn map_authenticated(err: ApiError) -> RepoError {
    match err {
        ApiError::Connectivity(_) => RepoError::new(MSG_CONNECTION, None),
        ApiError::Http { status: 401 } => RepoError::new(MSG_SESSION_EXPIRED, Some(401)),
        ApiError::Http { status } => RepoError::new(MSG_GENERIC, Some(status)),
        ApiError::Unexpected(_) => RepoError::new(MSG_GENERIC, None),
    }
}

/// A 2xx answer whose envelope carried no payload.
pub(crate) fn missing_payload(message: Option<String>) -> RepoError {
    RepoError::new(message.unwrap_or_else(|| MSG_UNKNOWN.to_string()), None)
}
