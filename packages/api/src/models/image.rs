use serde::{Deserialize, Serialize};

/// One entry of the caller's submission history (`GET /image`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSubmission {
    pub id: String,
    pub image_url: String,
    /// Classification the server assigned to this upload.
    pub acne_type: String,
    /// Milliseconds since the epoch.
    pub created_at: i64,
}

/// A sample image for one acne type (`GET /image/{acne_type}`).
///
/// No `acne_type` field — the type is the request path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcneImage {
    pub id: String,
    pub image_url: String,
    /// Milliseconds since the epoch.
    pub created_at: i64,
}
