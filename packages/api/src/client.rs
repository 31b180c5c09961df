//! # Typed client for the Acnetify REST backend
//!
//! One method per endpoint, grouped the way the backend groups them:
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `POST /auth/register` | [`ApiClient::sign_up`] |
//! | `POST /auth/login` | [`ApiClient::sign_in`] |
//! | `GET /review` | [`ApiClient::all_reviews`] |
//! | `GET /review/{acne_type}` | [`ApiClient::reviews_by_type`] |
//! | `POST /review` | [`ApiClient::create_review`] |
//! | `PUT /review/{review_id}/upvote` | [`ApiClient::upvote_review`] |
//! | `PUT /review/{review_id}/cancel-upvote` | [`ApiClient::cancel_upvote_review`] |
//! | `POST /image/upload` | [`ApiClient::upload_image`] |
//! | `GET /image` | [`ApiClient::image_submissions`] |
//! | `GET /image/{acne_type}` | [`ApiClient::images_by_type`] |
//!
//! Authenticated methods take `token: Option<&str>` and attach
//! `Authorization: Bearer <token>` only when one is present. There is no
//! ambient credential lookup: whoever calls decides which session the call
//! runs under.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    Ack, AcneImage, CreateReviewRequest, CreatedReview, Envelope, ImageSubmission, Review,
    SignInRequest, SignUpRequest, User,
};

/// Production backend. Overridable per client via [`ApiClient::new`].
pub const DEFAULT_BASE_URL: &str = "https://acnetify-api-4w3g2mhkta-et.a.run.app";

/// HTTP client for the Acnetify backend.
///
/// Cheap to clone; the inner connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{path}", self.base_url));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Register a new user.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<Envelope<Option<User>>, ApiError> {
        tracing::debug!(username = %request.username, "sign up");
        Self::execute(self.request(Method::POST, "/auth/register", None).json(request)).await
    }

    /// Authenticate an existing user.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<Envelope<Option<User>>, ApiError> {
        tracing::debug!(username = %request.username, "sign in");
        Self::execute(self.request(Method::POST, "/auth/login", None).json(request)).await
    }

    /// One page of all reviews, sorted by newest.
    pub async fn all_reviews(
        &self,
        token: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Review>, ApiError> {
        let envelope: Envelope<Vec<Review>> = Self::execute(
            self.request(Method::GET, "/review", token)
                .query(&[("limit", limit), ("offset", offset)]),
        )
        .await?;
        Ok(envelope.data)
    }

    /// One page of reviews for a single acne type, sorted by upvotes.
    pub async fn reviews_by_type(
        &self,
        token: Option<&str>,
        acne_type: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Review>, ApiError> {
        let envelope: Envelope<Vec<Review>> = Self::execute(
            self.request(Method::GET, &format!("/review/{acne_type}"), token)
                .query(&[("limit", limit), ("offset", offset)]),
        )
        .await?;
        Ok(envelope.data)
    }

    /// Create a review.
    pub async fn create_review(
        &self,
        token: Option<&str>,
        request: &CreateReviewRequest,
    ) -> Result<Envelope<Option<CreatedReview>>, ApiError> {
        Self::execute(self.request(Method::POST, "/review", token).json(request)).await
    }

    /// Upvote a review.
    pub async fn upvote_review(&self, token: Option<&str>, review_id: &str) -> Result<Ack, ApiError> {
        Self::execute(self.request(Method::PUT, &format!("/review/{review_id}/upvote"), token)).await
    }

    /// Take back an upvote.
    pub async fn cancel_upvote_review(
        &self,
        token: Option<&str>,
        review_id: &str,
    ) -> Result<Ack, ApiError> {
        Self::execute(self.request(
            Method::PUT,
            &format!("/review/{review_id}/cancel-upvote"),
            token,
        ))
        .await
    }

    /// Upload a JPEG for classification. The envelope's `data` is the
    /// predicted acne type.
    pub async fn upload_image(
        &self,
        token: Option<&str>,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Envelope<Option<String>>, ApiError> {
        tracing::debug!(file_name, size = bytes.len(), "uploading image");
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .map_err(|err| ApiError::Unexpected(err.to_string()))?;
        let form = reqwest::multipart::Form::new().part("image", part);
        Self::execute(
            self.request(Method::POST, "/image/upload", token)
                .multipart(form),
        )
        .await
    }

    /// One page of the caller's submission history.
    pub async fn image_submissions(
        &self,
        token: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ImageSubmission>, ApiError> {
        let envelope: Envelope<Vec<ImageSubmission>> = Self::execute(
            self.request(Method::GET, "/image", token)
                .query(&[("limit", limit), ("offset", offset)]),
        )
        .await?;
        Ok(envelope.data)
    }

    /// Sample images for one acne type (unpaged).
    pub async fn images_by_type(
        &self,
        token: Option<&str>,
        acne_type: &str,
    ) -> Result<Vec<AcneImage>, ApiError> {
        let envelope: Envelope<Vec<AcneImage>> =
            Self::execute(self.request(Method::GET, &format!("/image/{acne_type}"), token)).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_parses_user_payload() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "alice",
                "password": "hunter2hunter2"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"message":"login success","data":{"id":"u-1","username":"alice","token":"tok-abc"}}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let request = SignInRequest {
            username: "alice".into(),
            password: "hunter2hunter2".into(),
        };
        let envelope = client.sign_in(&request).await.unwrap();
        let user = envelope.data.unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.token, "tok-abc");
    }

    #[tokio::test]
    async fn bearer_token_is_attached_when_present() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PUT", "/review/rev-1/upvote")
            .match_header("authorization", "Bearer tok-abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"upvoted"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let ack = client
            .upvote_review(Some("tok-abc"), "rev-1")
            .await
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("upvoted"));
    }

    #[tokio::test]
    async fn pagination_query_parameters_are_sent() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/review")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "10".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"ok","data":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let reviews = client.all_reviews(None, 10, 20).await.unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn non_2xx_classifies_as_http_with_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/image")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message":"unauthorized"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.image_submissions(None, 10, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 401 }));
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn malformed_body_classifies_as_unexpected() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/image/milia")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.images_by_type(None, "milia").await.unwrap_err();
        assert!(matches!(err, ApiError::Unexpected(_)));
    }

    #[tokio::test]
    async fn unreachable_server_classifies_as_connectivity() {
        // Nothing listens on this port.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.all_reviews(None, 10, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::Connectivity(_)));
    }
}
