//! Shared repository constructors for all platforms.
//!
//! Returns repositories backed by the appropriate [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::LocalStore`]
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`]
//!   under `<data_dir>/acnetify/`

use api::{ApiClient, AuthRepository, ImageRepository, ReviewsRepository, DEFAULT_BASE_URL};
use store::SessionStore;

/// Client for the configured backend.
///
/// Native builds honor `ACNETIFY_API_URL`; everything else talks to the
/// production backend.
pub fn api_client() -> ApiClient {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(url) = std::env::var("ACNETIFY_API_URL") {
            if !url.trim().is_empty() {
                return ApiClient::new(url);
            }
        }
    }
    ApiClient::new(DEFAULT_BASE_URL)
}

/// Platform-appropriate session store.
pub fn session_store() -> impl SessionStore + Clone {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("acnetify");
        store::FileStore::new(base)
    }
}

pub fn auth_repository() -> AuthRepository<impl SessionStore + Clone> {
    AuthRepository::new(api_client(), session_store())
}

pub fn reviews_repository() -> ReviewsRepository<impl SessionStore + Clone> {
    ReviewsRepository::new(api_client(), session_store())
}

pub fn image_repository() -> ImageRepository<impl SessionStore + Clone> {
    ImageRepository::new(api_client(), session_store())
}
