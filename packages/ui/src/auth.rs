//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::AuthSession;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(session: AuthSession) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores the persisted session on mount.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Read the session store once on mount
    let _ = use_resource(move || async move {
        let session = crate::repo::auth_repository().logged_in_user().await;
        auth_state.set(AuthState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that clears the session and returns to the welcome screen.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| async move {
        crate::repo::auth_repository().log_out().await;
        auth_state.set(AuthState::signed_out());
        nav.push("/welcome");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
