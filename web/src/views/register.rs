//! Registration page.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::{sign_up, use_auth, ErrorBanner};

use crate::guards::PublicOnly;
use crate::Route;

#[component]
pub fn Register() -> Element {
    rsx! {
        PublicOnly {
            RegisterPage {}
        }
    }
}

#[component]
fn RegisterPage() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let request = RegisterRequest {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
            };

            if request.first_name.is_empty() || request.last_name.is_empty() {
                error.set(Some("Please tell us your name".to_string()));
                return;
            }
            if request.username.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if request.email.is_empty() || !request.email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if request.password.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if request.password != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match sign_up(auth, &request).await {
                Ok(()) => {
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Create your account" }
            p { class: "auth-subtitle", "Join your campus community" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                div {
                    class: "form-row",
                    input {
                        r#type: "text",
                        placeholder: "First name",
                        value: first_name(),
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Last name",
                        value: last_name(),
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
