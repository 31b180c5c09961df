use serde::{Deserialize, Serialize};

/// A community review as it appears in listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique within a listing; used as the list key in the UI.
    pub id: String,
    pub user_id: String,
    #[serde(rename = "user_username")]
    pub username: String,
    pub acne_type: String,
    pub body: String,
    /// Milliseconds since the epoch.
    pub created_at: i64,
    /// Upvote count. Server-authoritative: the client never computes it,
    /// only triggers upvote/cancel-upvote and re-reads.
    #[serde(default)]
    pub upvote: u32,
    /// Whether the signed-in caller has upvoted this review.
    #[serde(default)]
    pub is_liked: bool,
}

/// Payload of a freshly created review.
///
/// The backend answers `POST /review` with `post_`-prefixed field names and a
/// string timestamp, unlike listings. Preserved as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedReview {
    pub user_id: String,
    #[serde(rename = "user_username")]
    pub username: String,
    pub acne_type: String,
    #[serde(rename = "post_body")]
    pub body: String,
    #[serde(rename = "post_upvote", default)]
    pub upvote: u32,
    pub created_at: String,
}

/// Body of `POST /review`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateReviewRequest {
    pub acne_type: String,
    pub body: String,
}
