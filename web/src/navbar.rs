//! App shell: top navigation plus the routed page below it.

use dioxus::prelude::*;
use ui::{sign_out, use_auth};

use crate::Route;

#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut unread = use_resource(move || async move {
        if !auth().is_authenticated() {
            return 0;
        }
        match api::messages::unread_count().await {
            Ok(count) => count.unread_count,
            Err(err) => {
                tracing::debug!("unread count fetch failed: {err}");
                0
            }
        }
    });

    // Keep the unread badge fresh without any push transport.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        spawn(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                unread.restart();
            }
        });
    });

    let handle_logout = move |_| {
        spawn(async move {
            sign_out(auth).await;
            nav.push(Route::Home {});
        });
    };

    let unread_count = unread().unwrap_or(0);
    let state = auth();

    rsx! {
        nav {
            class: "navbar",
            Link { class: "nav-brand", to: Route::Home {}, "StudentConnect" }

            if let Some(user) = state.user.as_ref() {
                div {
                    class: "nav-links",
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    Link { to: Route::Communities {}, "Communities" }
                    Link { to: Route::Projects {}, "Projects" }
                    Link { to: Route::Events {}, "Events" }
                    Link { to: Route::Tutorials {}, "Tutorials" }
                    Link {
                        to: Route::Messages {},
                        "Messages"
                        if unread_count > 0 {
                            span { class: "nav-badge", "{unread_count}" }
                        }
                    }
                }
                div {
                    class: "nav-session",
                    Link { class: "nav-user", to: Route::Profile {}, "{user.display_name()}" }
                    button { class: "secondary", onclick: handle_logout, "Log out" }
                }
            } else if !state.loading {
                div {
                    class: "nav-session",
                    Link { to: Route::Login {}, "Sign in" }
                    Link { class: "nav-cta", to: Route::Register {}, "Join now" }
                }
            }
        }
    }
}
