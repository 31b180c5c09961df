//! # API crate — remote contract, pagination, and repositories for Acnetify
//!
//! This crate is the backbone of the Acnetify client: everything between the
//! UI and the acne-tracking REST backend lives here, shared by the web,
//! desktop, and mobile shells.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Typed [`ApiClient`] with one method per REST endpoint; bearer tokens are passed explicitly per call |
//! | [`error`] | Transport error taxonomy: connectivity / HTTP-with-status / unexpected |
//! | [`models`] | Wire records (`User`, `Review`, `ImageSubmission`, ...) with explicit serde schemas |
//! | [`paging`] | Page-key arithmetic, the [`PagingSource`] trait, and the [`Pager`] accumulator |
//! | [`sources`] | The three paging sources: all reviews, reviews by type, submission history |
//! | [`repository`] | Per-domain façades that convert every failure into a user-facing [`RepoError`] |
//! | [`result`] | The three-state [`FetchState`] union used across the presentation boundary |
//! | [`catalog`] | Static acne-type reference data and display labels |
//!
//! Data flows one direction: a view calls a repository (or drives a pager),
//! the repository calls the client, and results come back as
//! `Result<T, RepoError>` or pages. Nothing below the repository boundary
//! leaks a raw transport error to the UI.

pub mod catalog;
pub mod client;
pub mod error;
pub mod models;
pub mod paging;
pub mod repository;
pub mod result;
pub mod sources;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{
    Ack, AcneImage, CreateReviewRequest, CreatedReview, Envelope, ImageSubmission, Review,
    SignInRequest, SignUpRequest, User,
};
pub use paging::{
    LoadError, LoadParams, LoadState, LoadedPage, Pager, PagingSource, DEFAULT_PAGE_SIZE,
    INITIAL_PAGE,
};
pub use repository::{AuthRepository, ImageRepository, ReviewsRepository};
pub use result::{FetchState, RepoError};
pub use sources::{AllReviewsSource, ReviewsByTypeSource, SubmissionHistorySource};
