//! Login page with username/password form.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::{sign_in, use_auth, ErrorBanner};

use crate::guards::PublicOnly;
use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        PublicOnly {
            LoginPage {}
        }
    }
}

#[component]
fn LoginPage() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let request = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            if request.username.is_empty() || request.password.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            match sign_in(auth, &request).await {
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
            h1 { "Welcome back" }
            p { class: "auth-subtitle", "Sign in to StudentConnect" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
