//! Sign-in form.

use dioxus::prelude::*;

use api::{FetchState, User};
use store::AuthSession;

use crate::{use_auth, AuthState};

#[component]
pub fn SignIn() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut state = use_signal(|| Option::<FetchState<User>>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);

            let user = username().trim().to_string();
            let pass = password();
            if user.is_empty() || pass.is_empty() {
                form_error.set(Some("Please fill in both fields".to_string()));
                return;
            }

            state.set(Some(FetchState::Loading));
            match crate::repo::auth_repository().sign_in(&user, &pass).await {
                Ok(signed_in) => {
                    auth.set(AuthState::signed_in(AuthSession::new(
                        &signed_in.id,
                        &signed_in.username,
                        &signed_in.token,
                    )));
                    state.set(Some(FetchState::Success(signed_in)));
                    nav.replace("/home");
                }
                Err(err) => state.set(Some(FetchState::Error(err))),
            }
        });
    };

    let loading = matches!(state(), Some(FetchState::Loading));

    rsx! {
        div { class: "auth-page",
            h1 { class: "auth-page__title", "Welcome back" }
            p { class: "auth-page__subtitle", "Sign in to Acnetify" }

            form { class: "auth-form", onsubmit: handle_submit,
                if let Some(message) = form_error() {
                    div { class: "form-error", "{message}" }
                }
                if let Some(FetchState::Error(err)) = state() {
                    div { class: "form-error", "{err.message()}" }
                }

                label { class: "auth-form__label", r#for: "signin-username", "Username" }
                input {
                    id: "signin-username",
                    class: "auth-form__input",
                    r#type: "text",
                    placeholder: "username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }

                label { class: "auth-form__label", r#for: "signin-password", "Password" }
                input {
                    id: "signin-password",
                    class: "auth-form__input",
                    r#type: "password",
                    placeholder: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Signing in..." } else { "Sign in" }
                }
            }

            p { class: "auth-page__switch",
                "No account yet? "
                a {
                    class: "auth-page__link",
                    onclick: move |_| { nav.push("/signup"); },
                    "Create one"
                }
            }
        }
    }
}
