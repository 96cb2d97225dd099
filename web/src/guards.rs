//! Route guards: pure functions of the session state, no network calls.

use dioxus::prelude::*;
use ui::{use_auth, GuardDecision};

use crate::Route;

/// Renders children only for an authenticated session. Shows a spinner while
/// the session bootstrap is still running, and redirects anonymous visitors
/// to the login page.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match GuardDecision::for_protected(&auth()) {
        GuardDecision::Loading => rsx! { PageSpinner {} },
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Deny => {
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}

/// Inverse guard for the login/register pages: an authenticated session is
/// sent to the dashboard instead.
#[component]
pub fn PublicOnly(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match GuardDecision::for_public_only(&auth()) {
        GuardDecision::Loading => rsx! { PageSpinner {} },
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Deny => {
            nav.replace(Route::Dashboard {});
            rsx! {}
        }
    }
}

#[component]
pub fn PageSpinner() -> Element {
    rsx! {
        div {
            class: "page-loading",
            div { class: "spinner" }
        }
    }
}
