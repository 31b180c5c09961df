//! This crate contains all shared UI for the workspace: the auth context,
//! the pager hook, feed components, and one view per screen. The web,
//! desktop, and mobile shells only add a router and a stylesheet.

use dioxus::prelude::*;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod repo;
pub use repo::{api_client, auth_repository, image_repository, reviews_repository, session_store};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod paging;
pub use paging::{use_pager, UsePager};

pub mod format;

pub mod components;
pub use components::{LoadStateFooter, NewReviewDialog, ReviewCard};

mod navbar;
pub use navbar::BottomNav;

pub mod views;
