//! Authentication: register, sign in, session lifecycle.

use store::{AuthSession, SessionStore};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{SignInRequest, SignUpRequest, User};
use crate::repository::missing_payload;
use crate::result::{RepoError, MSG_CONNECTION, MSG_GENERIC};

const MSG_CREDENTIAL_RULES: &str =
    "Username or password must be at least 8 characters long and at most 64 characters long";
const MSG_USERNAME_TAKEN: &str = "Username already exists";
const MSG_WRONG_CREDENTIALS: &str = "Username or password is incorrect";

fn sign_up_error(err: ApiError) -> RepoError {
    match err {
        ApiError::Connectivity(_) => RepoError::new(MSG_CONNECTION, None),
        ApiError::Http { status: 400 } => RepoError::new(MSG_CREDENTIAL_RULES, Some(400)),
        ApiError::Http { status: 409 } => RepoError::new(MSG_USERNAME_TAKEN, Some(409)),
        ApiError::Http { status } => RepoError::new(MSG_GENERIC, Some(status)),
        ApiError::Unexpected(_) => RepoError::new(MSG_GENERIC, None),
    }
}

fn sign_in_error(err: ApiError) -> RepoError {
    match err {
        ApiError::Connectivity(_) => RepoError::new(MSG_CONNECTION, None),
        ApiError::Http { status: 400 } => RepoError::new(MSG_CREDENTIAL_RULES, Some(400)),
        ApiError::Http { status: 401 } => RepoError::new(MSG_WRONG_CREDENTIALS, Some(401)),
        ApiError::Http { status } => RepoError::new(MSG_GENERIC, Some(status)),
        ApiError::Unexpected(_) => RepoError::new(MSG_GENERIC, None),
    }
}

/// Façade over the auth endpoints plus the persisted session.
#[derive(Clone, Debug)]
pub struct AuthRepository<S> {
    client: ApiClient,
    sessions: S,
}

impl<S: SessionStore> AuthRepository<S> {
    pub fn new(client: ApiClient, sessions: S) -> Self {
        Self { client, sessions }
    }

    /// Register a new account. Does not sign the user in.
    pub async fn sign_up(&self, username: &str, password: &str) -> Result<User, RepoError> {
        let request = SignUpRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let envelope = self.client.sign_up(&request).await.map_err(sign_up_error)?;
        envelope.data.ok_or_else(|| missing_payload(envelope.message))
    }

    /// Authenticate and persist the session.
    ///
    /// On success exactly `{user_id, username, token}` is written to the
    /// store; on any failure the previously persisted session is untouched.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<User, RepoError> {
        let request = SignInRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let envelope = self.client.sign_in(&request).await.map_err(sign_in_error)?;
        let user = envelope
            .data
            .ok_or_else(|| missing_payload(envelope.message))?;

        self.sessions
            .save(&AuthSession::new(&user.id, &user.username, &user.token))
            .await;
        tracing::info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    /// The persisted session, if any.
    pub async fn logged_in_user(&self) -> Option<AuthSession> {
        self.sessions.load().await
    }

    /// Clear the persisted session.
    pub async fn log_out(&self) {
        self.sessions.clear().await;
        tracing::info!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn user_body() -> String {
        r#"{"message":"login success","data":{"id":"u-1","username":"alice","token":"tok-abc"}}"#
            .to_string()
    }

    #[tokio::test]
    async fn sign_in_persists_exactly_the_session_triple() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(user_body())
            .create_async()
            .await;

        let sessions = MemoryStore::new();
        let repo = AuthRepository::new(ApiClient::new(server.url()), sessions.clone());
        let user = repo.sign_in("alice", "hunter2hunter2").await.unwrap();
        assert_eq!(user.username, "alice");

        let session = sessions.load().await.unwrap();
        assert_eq!(
            session,
            AuthSession::new("u-1", "alice", "tok-abc")
        );
    }

    #[tokio::test]
    async fn failed_sign_in_leaves_prior_session_untouched() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"wrong password"}"#)
            .create_async()
            .await;

        let sessions = MemoryStore::new();
        let prior = AuthSession::new("u-0", "mallory", "tok-old");
        sessions.save(&prior).await;

        let repo = AuthRepository::new(ApiClient::new(server.url()), sessions.clone());
        let err = repo.sign_in("alice", "wrong").await.unwrap_err();
        assert_eq!(err.message(), "Username or password is incorrect");
        assert_eq!(sessions.load().await, Some(prior));
    }

    #[tokio::test]
    async fn sign_in_null_payload_is_an_unknown_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":null}"#)
            .create_async()
            .await;

        let sessions = MemoryStore::new();
        let repo = AuthRepository::new(ApiClient::new(server.url()), sessions.clone());
        let err = repo.sign_in("alice", "hunter2hunter2").await.unwrap_err();
        assert_eq!(err.message(), "Unknown error occurred");
        assert!(sessions.load().await.is_none());
    }

    #[tokio::test]
    async fn sign_up_maps_conflict_and_validation_statuses() {
        let mut server = mockito::Server::new_async().await;
        let _conflict = server
            .mock("POST", "/auth/register")
            .with_status(409)
            .with_body(r#"{"message":"taken"}"#)
            .expect(1)
            .create_async()
            .await;

        let repo = AuthRepository::new(ApiClient::new(server.url()), MemoryStore::new());
        let err = repo.sign_up("alice", "hunter2hunter2").await.unwrap_err();
        assert_eq!(err.message(), "Username already exists");
        assert_eq!(err.status(), Some(409));

        let _bad_request = server
            .mock("POST", "/auth/register")
            .with_status(400)
            .with_body(r#"{"message":"too short"}"#)
            .expect(1)
            .create_async()
            .await;
        let err = repo.sign_up("alice", "short").await.unwrap_err();
        assert_eq!(
            err.message(),
            "Username or password must be at least 8 characters long and at most 64 characters long"
        );
    }

    #[tokio::test]
    async fn log_out_clears_every_persisted_field() {
        let sessions = MemoryStore::new();
        sessions
            .save(&AuthSession::new("u-1", "alice", "tok-abc"))
            .await;

        let repo = AuthRepository::new(ApiClient::new("http://localhost:0"), sessions.clone());
        assert!(repo.logged_in_user().await.is_some());
        repo.log_out().await;
        assert_eq!(sessions.load().await, None);
        assert!(repo.logged_in_user().await.is_none());
    }
}
