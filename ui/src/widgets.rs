//! Small shared widgets used by every resource view.

use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Previous/next pager. Renders nothing when there is a single page.
#[component]
pub fn Pagination(page: u32, pages: u32, on_change: EventHandler<u32>) -> Element {
    if pages <= 1 {
        return rsx! {};
    }
    rsx! {
        div {
            class: "pagination",
            button {
                class: "secondary",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "Previous"
            }
            span { class: "pagination-label", "Page {page} of {pages}" }
            button {
                class: "secondary",
                disabled: page >= pages,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}

#[component]
pub fn EmptyState(title: String, hint: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "{title}" }
            p { "{hint}" }
        }
    }
}

/// Skeleton cards shown while a list loads.
#[component]
pub fn LoadingCards(#[props(default = 6)] count: usize) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for index in 0..count {
                div { key: "{index}", class: "card skeleton" }
            }
        }
    }
}
