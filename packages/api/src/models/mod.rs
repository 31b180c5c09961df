//! # Wire records
//!
//! Flat transport records for the REST backend, one struct per JSON shape.
//! Schemas are explicit: required fields are plain types, genuinely optional
//! fields are `Option` or `#[serde(default)]`, and Rust field names that
//! differ from the wire carry `#[serde(rename)]`.

mod image;
mod review;
mod user;

pub use image::{AcneImage, ImageSubmission};
pub use review::{CreateReviewRequest, CreatedReview, Review};
pub use user::{SignInRequest, SignUpRequest, User};

use serde::Deserialize;

/// The `{"message": ..., "data": ...}` envelope every endpoint responds with.
///
/// `data` defaults when absent (lists decode to empty, optional payloads to
/// `None`), matching a backend that omits the field on some error bodies.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: T,
}

/// Message-only acknowledgement, returned by the upvote endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
