use serde::{Deserialize, Serialize};

/// Session identity returned by the auth endpoints.
///
/// All three fields are required: a sign-in payload missing any of them is
/// treated as an unexpected response, not silently defaulted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Bearer token attached to authenticated calls.
    pub token: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}
