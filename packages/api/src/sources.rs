//! The three paging sources, one per paginated listing.
//!
//! Each source turns a [`LoadParams`] into one backend call: compute the
//! wire offset from the page key, read the current token from the session
//! store (an explicit handle, not ambient state), fetch, and apply the key
//! rules. Transport failures map onto [`LoadError`] and surface as the
//! paging layer's retry affordance.

use store::SessionStore;

use crate::client::ApiClient;
use crate::models::{ImageSubmission, Review};
use crate::paging::{LoadError, LoadParams, LoadedPage, PagingSource};

async fn current_token<S: SessionStore>(sessions: &S) -> Option<String> {
    sessions.load().await.map(|session| session.token)
}

/// `GET /review` — every review, sorted by newest.
#[derive(Clone, Debug)]
pub struct AllReviewsSource<S> {
    client: ApiClient,
    sessions: S,
}

impl<S> AllReviewsSource<S> {
    pub fn new(client: ApiClient, sessions: S) -> Self {
        Self { client, sessions }
    }
}

impl<S: SessionStore> PagingSource<Review> for AllReviewsSource<S> {
    async fn load(&self, params: LoadParams) -> Result<LoadedPage<Review>, LoadError> {
        let page = params.page();
        let token = current_token(&self.sessions).await;
        match self
            .client
            .all_reviews(token.as_deref(), params.load_size, params.offset())
            .await
        {
            Ok(items) => Ok(LoadedPage::from_fetch(page, params.load_size, items)),
            Err(err) => {
                tracing::warn!("failed to load reviews page {page}: {err}");
                Err(err.into())
            }
        }
    }
}

/// `GET /review/{acne_type}` — one type's reviews, sorted by upvotes.
#[derive(Clone, Debug)]
pub struct ReviewsByTypeSource<S> {
    client: ApiClient,
    sessions: S,
    acne_type: String,
}

impl<S> ReviewsByTypeSource<S> {
    pub fn new(client: ApiClient, sessions: S, acne_type: impl Into<String>) -> Self {
        Self {
            client,
            sessions,
            acne_type: acne_type.into(),
        }
    }
}

impl<S: SessionStore> PagingSource<Review> for ReviewsByTypeSource<S> {
    async fn load(&self, params: LoadParams) -> Result<LoadedPage<Review>, LoadError> {
        let page = params.page();
        let token = current_token(&self.sessions).await;
        match self
            .client
            .reviews_by_type(
                token.as_deref(),
                &self.acne_type,
                params.load_size,
                params.offset(),
            )
            .await
        {
            Ok(items) => Ok(LoadedPage::from_fetch(page, params.load_size, items)),
            Err(err) => {
                tracing::warn!(
                    acne_type = %self.acne_type,
                    "failed to load reviews page {page}: {err}"
                );
                Err(err.into())
            }
        }
    }
}

/// `GET /image` — the caller's classification history.
#[derive(Clone, Debug)]
pub struct SubmissionHistorySource<S> {
    client: ApiClient,
    sessions: S,
}

impl<S> SubmissionHistorySource<S> {
    pub fn new(client: ApiClient, sessions: S) -> Self {
        Self { client, sessions }
    }
}

impl<S: SessionStore> PagingSource<ImageSubmission> for SubmissionHistorySource<S> {
    async fn load(&self, params: LoadParams) -> Result<LoadedPage<ImageSubmission>, LoadError> {
        let page = params.page();
        let token = current_token(&self.sessions).await;
        match self
            .client
            .image_submissions(token.as_deref(), params.load_size, params.offset())
            .await
        {
            Ok(items) => Ok(LoadedPage::from_fetch(page, params.load_size, items)),
            Err(err) => {
                tracing::warn!("failed to load submission history page {page}: {err}");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{AuthSession, MemoryStore};

    fn review_json(id: u32) -> serde_json::Value {
        serde_json::json!({
            "id": format!("rev-{id}"),
            "user_id": "u-1",
            "user_username": "alice",
            "created_at": 1716911546804u64,
            "acne_type": "milia",
            "body": format!("review {id}"),
            "upvote": id,
            "is_liked": false
        })
    }

    #[tokio::test]
    async fn full_page_yields_next_key() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "message": "ok",
            "data": (0..10).map(review_json).collect::<Vec<_>>()
        });
        let _m = server
            .mock("GET", "/review")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "10".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let source = AllReviewsSource::new(ApiClient::new(server.url()), MemoryStore::new());
        let page = source
            .load(LoadParams {
                key: None,
                load_size: 10,
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.prev_key, None);
        assert_eq!(page.next_key, Some(2));
    }

    #[tokio::test]
    async fn second_page_sends_offset_and_short_page_terminates() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "message": "ok",
            "data": (0..3).map(review_json).collect::<Vec<_>>()
        });
        let _m = server
            .mock("GET", "/review/milia")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "10".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "10".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await;

        let source =
            ReviewsByTypeSource::new(ApiClient::new(server.url()), MemoryStore::new(), "milia");
        let page = source
            .load(LoadParams {
                key: Some(2),
                load_size: 10,
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.prev_key, Some(1));
        assert_eq!(page.next_key, None);
    }

    #[tokio::test]
    async fn history_source_attaches_the_stored_token() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/image")
            .match_header("authorization", "Bearer tok-abc")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"ok","data":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let sessions = MemoryStore::new();
        sessions
            .save(&AuthSession::new("u-1", "alice", "tok-abc"))
            .await;
        let source = SubmissionHistorySource::new(ApiClient::new(server.url()), sessions);
        let page = source
            .load(LoadParams {
                key: None,
                load_size: 10,
            })
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_key, None);
    }

    #[tokio::test]
    async fn unauthorized_maps_to_http_401_load_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/image")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message":"unauthorized"}"#)
            .create_async()
            .await;

        let source = SubmissionHistorySource::new(ApiClient::new(server.url()), MemoryStore::new());
        let err = source
            .load(LoadParams {
                key: None,
                load_size: 10,
            })
            .await
            .unwrap_err();
        assert_eq!(err, LoadError::Http { status: 401 });
        assert!(err.is_unauthorized());
    }
}
