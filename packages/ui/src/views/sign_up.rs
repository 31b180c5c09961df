//! Registration form.

use dioxus::prelude::*;

use api::{FetchState, User};

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
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
            // Backend enforces the same bounds with a 400; checking here
            // saves the round-trip.
            if user.len() < 8 || user.len() > 64 || pass.len() < 8 || pass.len() > 64 {
                form_error.set(Some(
                    "Username and password must be between 8 and 64 characters".to_string(),
                ));
                return;
            }
            if pass != confirm_password() {
                form_error.set(Some("Passwords do not match".to_string()));
                return;
            }

            state.set(Some(FetchState::Loading));
            match crate::repo::auth_repository().sign_up(&user, &pass).await {
                Ok(created) => {
                    state.set(Some(FetchState::Success(created)));
                    nav.replace("/signin");
                }
                Err(err) => state.set(Some(FetchState::Error(err))),
            }
        });
    };

    let loading = matches!(state(), Some(FetchState::Loading));

    rsx! {
        div { class: "auth-page",
            h1 { class: "auth-page__title", "Create account" }
            p { class: "auth-page__subtitle", "Join the Acnetify community" }

            form { class: "auth-form", onsubmit: handle_submit,
                if let Some(message) = form_error() {
                    div { class: "form-error", "{message}" }
                }
                if let Some(FetchState::Error(err)) = state() {
                    div { class: "form-error", "{err.message()}" }
                }

                label { class: "auth-form__label", r#for: "signup-username", "Username" }
                input {
                    id: "signup-username",
                    class: "auth-form__input",
                    r#type: "text",
                    placeholder: "at least 8 characters",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }

                label { class: "auth-form__label", r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    class: "auth-form__input",
                    r#type: "password",
                    placeholder: "at least 8 characters",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                label { class: "auth-form__label", r#for: "signup-confirm", "Confirm password" }
                input {
                    id: "signup-confirm",
                    class: "auth-form__input",
                    r#type: "password",
                    placeholder: "repeat your password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Creating account..." } else { "Sign up" }
                }
            }

            p { class: "auth-page__switch",
                "Already registered? "
                a {
                    class: "auth-page__link",
                    onclick: move |_| { nav.push("/signin"); },
                    "Sign in"
                }
            }
        }
    }
}
