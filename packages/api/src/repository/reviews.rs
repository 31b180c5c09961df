//! Community reviews: paginated feeds, creation, upvotes.

use store::SessionStore;

use crate::client::ApiClient;
use crate::models::{CreateReviewRequest, CreatedReview};
use crate::repository::{map_authenticated, missing_payload};
use crate::result::RepoError;
use crate::sources::{AllReviewsSource, ReviewsByTypeSource};

/// Façade over the review endpoints.
#[derive(Clone, Debug)]
pub struct ReviewsRepository<S> {
    client: ApiClient,
    sessions: S,
}

impl<S: SessionStore + Clone> ReviewsRepository<S> {
    pub fn new(client: ApiClient, sessions: S) -> Self {
        Self { client, sessions }
    }

    async fn token(&self) -> Option<String> {
        self.sessions.load().await.map(|session| session.token)
    }

    /// Source for the home feed: every review, newest first.
    pub fn all_reviews(&self) -> AllReviewsSource<S> {
        AllReviewsSource::new(self.client.clone(), self.sessions.clone())
    }

    /// Source for one type's feed, most upvoted first.
    pub fn reviews_by_type(&self, acne_type: &str) -> ReviewsByTypeSource<S> {
        ReviewsByTypeSource::new(self.client.clone(), self.sessions.clone(), acne_type)
    }

    /// Post a new review for an acne type.
    pub async fn create_review(
        &self,
        acne_type: &str,
        body: &str,
    ) -> Result<CreatedReview, RepoError> {
        let request = CreateReviewRequest {
            acne_type: acne_type.to_string(),
            body: body.to_string(),
        };
        let token = self.token().await;
        let envelope = self
            .client
            .create_review(token.as_deref(), &request)
            .await
            .map_err(map_authenticated)?;
        envelope.data.ok_or_else(|| missing_payload(envelope.message))
    }

    /// Upvote a review. The count is server-authoritative — callers re-read
    /// the listing rather than mutate any local counter.
    pub async fn upvote(&self, review_id: &str) -> Result<(), RepoError> {
        let token = self.token().await;
        self.client
            .upvote_review(token.as_deref(), review_id)
            .await
            .map_err(map_authenticated)?;
        Ok(())
    }

    /// Take back an upvote.
    pub async fn cancel_upvote(&self, review_id: &str) -> Result<(), RepoError> {
        let token = self.token().await;
        self.client
            .cancel_upvote_review(token.as_deref(), review_id)
            .await
            .map_err(map_authenticated)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{AuthSession, MemoryStore};

    async fn signed_in_sessions() -> MemoryStore {
        let sessions = MemoryStore::new();
        sessions
            .save(&AuthSession::new("u-1", "alice", "tok-abc"))
            .await;
        sessions
    }

    #[tokio::test]
    async fn create_review_returns_the_created_payload() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/review")
            .match_header("authorization", "Bearer tok-abc")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "acne_type": "milia",
                "body": "Retinoid cream worked for me."
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"message":"created","data":{
                    "post_upvote":0,
                    "user_id":"u-1",
                    "user_username":"alice",
                    "created_at":"2024-05-28T15:12:26Z",
                    "acne_type":"milia",
                    "post_body":"Retinoid cream worked for me."
                }}"#,
            )
            .create_async()
            .await;

        let repo = ReviewsRepository::new(ApiClient::new(server.url()), signed_in_sessions().await);
        let created = repo
            .create_review("milia", "Retinoid cream worked for me.")
            .await
            .unwrap();
        assert_eq!(created.acne_type, "milia");
        assert_eq!(created.username, "alice");
    }

    #[tokio::test]
    async fn create_review_missing_payload_surfaces_server_message() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/review")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"review body too long","data":null}"#)
            .create_async()
            .await;

        let repo = ReviewsRepository::new(ApiClient::new(server.url()), MemoryStore::new());
        let err = repo.create_review("milia", "x").await.unwrap_err();
        assert_eq!(err.message(), "review body too long");
    }

    #[tokio::test]
    async fn upvote_then_cancel_are_independent_calls() {
        let mut server = mockito::Server::new_async().await;
        let _up = server
            .mock("PUT", "/review/rev-1/upvote")
            .match_header("authorization", "Bearer tok-abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"upvoted"}"#)
            .expect(1)
            .create_async()
            .await;
        let _cancel = server
            .mock("PUT", "/review/rev-1/cancel-upvote")
            .match_header("authorization", "Bearer tok-abc")
            .with_status(500)
            .with_body(r#"{"message":"boom"}"#)
            .expect(1)
            .create_async()
            .await;

        let repo = ReviewsRepository::new(ApiClient::new(server.url()), signed_in_sessions().await);
        // Upvote succeeds, cancel fails; neither outcome affects the other.
        repo.upvote("rev-1").await.unwrap();
        let err = repo.cancel_upvote("rev-1").await.unwrap_err();
        assert_eq!(err.message(), "Oops, something went wrong!");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn expired_session_gets_the_distinct_message() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PUT", "/review/rev-1/upvote")
            .with_status(401)
            .with_body(r#"{"message":"unauthorized"}"#)
            .create_async()
            .await;

        let repo = ReviewsRepository::new(ApiClient::new(server.url()), MemoryStore::new());
        let err = repo.upvote("rev-1").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Your session has expired, please sign in again.");
        assert_ne!(err.message(), "Oops, something went wrong!");
    }

    #[tokio::test]
    async fn connectivity_failure_gets_the_connection_message() {
        let repo = ReviewsRepository::new(ApiClient::new("http://127.0.0.1:9"), MemoryStore::new());
        let err = repo.upvote("rev-1").await.unwrap_err();
        assert_eq!(
            err.message(),
            "Couldn't reach server, check your internet connection."
        );
        assert_eq!(err.status(), None);
    }
}
