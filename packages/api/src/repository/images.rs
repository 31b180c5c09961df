//! Image uploads and classified-image browsing.

use store::SessionStore;

use crate::client::ApiClient;
use crate::models::AcneImage;
use crate::repository::{map_authenticated, missing_payload};
use crate::result::RepoError;
use crate::sources::SubmissionHistorySource;

/// Façade over the image endpoints.
#[derive(Clone, Debug)]
pub struct ImageRepository<S> {
    client: ApiClient,
    sessions: S,
}

impl<S: SessionStore + Clone> ImageRepository<S> {
    pub fn new(client: ApiClient, sessions: S) -> Self {
        Self { client, sessions }
    }

    async fn token(&self) -> Option<String> {
        self.sessions.load().await.map(|session| session.token)
    }

    /// Upload a JPEG and return the predicted acne type.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, RepoError> {
        let token = self.token().await;
        let envelope = self
            .client
            .upload_image(token.as_deref(), file_name, bytes)
            .await
            .map_err(map_authenticated)?;
        envelope.data.ok_or_else(|| missing_payload(envelope.message))
    }

    /// Source for the caller's submission history.
    pub fn submission_history(&self) -> SubmissionHistorySource<S> {
        SubmissionHistorySource::new(self.client.clone(), self.sessions.clone())
    }

    /// Sample images for one acne type (unpaged).
    pub async fn images_by_type(&self, acne_type: &str) -> Result<Vec<AcneImage>, RepoError> {
        let token = self.token().await;
        self.client
            .images_by_type(token.as_deref(), acne_type)
            .await
            .map_err(map_authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{AuthSession, MemoryStore};

    #[tokio::test]
    async fn upload_returns_the_predicted_type() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/image/upload")
            .match_header("authorization", "Bearer tok-abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"uploaded","data":"papula_pustula"}"#)
            .create_async()
            .await;

        let sessions = MemoryStore::new();
        sessions
            .save(&AuthSession::new("u-1", "alice", "tok-abc"))
            .await;
        let repo = ImageRepository::new(ApiClient::new(server.url()), sessions);
        let predicted = repo
            .upload("selfie.jpg", vec![0xFF, 0xD8, 0xFF])
            .await
            .unwrap();
        assert_eq!(predicted, "papula_pustula");
    }

    #[tokio::test]
    async fn upload_unauthorized_surfaces_session_expired() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/image/upload")
            .with_status(401)
            .with_body(r#"{"message":"unauthorized"}"#)
            .create_async()
            .await;

        let repo = ImageRepository::new(ApiClient::new(server.url()), MemoryStore::new());
        let err = repo
            .upload("selfie.jpg", vec![0xFF, 0xD8, 0xFF])
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Your session has expired, please sign in again.");
    }

    #[tokio::test]
    async fn images_by_type_returns_the_listing() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/image/blackhead")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"message":"ok","data":[
                    {"id":"img-1","image_url":"https://cdn.example.com/1.jpg","created_at":1716911546804},
                    {"id":"img-2","image_url":"https://cdn.example.com/2.jpg","created_at":1716911546900}
                ]}"#,
            )
            .create_async()
            .await;

        let repo = ImageRepository::new(ApiClient::new(server.url()), MemoryStore::new());
        let images = repo.images_by_type("blackhead").await.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "img-1");
    }
}
