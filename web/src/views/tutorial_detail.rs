//! Tutorial detail: full content plus video/external links, with a delete
//! control for the author.

use api::Tutorial;
use dioxus::prelude::*;
use ui::{use_auth, EmptyState, ErrorBanner};

use super::format_date;
use crate::guards::{PageSpinner, RequireAuth};
use crate::Route;

#[component]
pub fn TutorialDetail(id: u64) -> Element {
    rsx! {
        RequireAuth {
            TutorialDetailPage { id }
        }
    }
}

#[component]
fn TutorialDetailPage(id: u64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut tutorial = use_signal(|| Option::<Tutorial>::None);
    let mut not_found = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let _loader = use_resource(move || async move {
        error.set(None);
        match api::tutorials::get(id).await {
            Ok(found) => {
                tutorial.set(Some(found));
                not_found.set(false);
            }
            Err(err) if err.is_not_found() => not_found.set(true),
            Err(err) => {
                tracing::error!("failed to load tutorial {id}: {err}");
                error.set(Some(err.to_string()));
            }
        }
    });

    let handle_delete = move |_| {
        spawn(async move {
            deleting.set(true);
            match api::tutorials::delete(id).await {
                Ok(()) => {
                    nav.push(Route::Tutorials {});
                }
                Err(err) => {
                    tracing::error!("failed to delete tutorial: {err}");
                    error.set(Some(err.to_string()));
                    deleting.set(false);
                }
            }
        });
    };

    if not_found() {
        return rsx! {
            div {
                class: "page",
                EmptyState {
                    title: "Tutorial not found",
                    hint: "It may have been removed",
                }
                Link { to: Route::Tutorials {}, class: "button secondary", "Back to tutorials" }
            }
        };
    }

    let Some(tutorial) = tutorial() else {
        return rsx! {
            PageSpinner {}
        };
    };
    let is_author = auth().user_id() == tutorial.creator_id;
    let description = tutorial
        .description
        .clone()
        .unwrap_or_default();

    rsx! {
        div {
            class: "page detail-page",
            div {
                class: "detail-header",
                div {
                    h1 { "{tutorial.title}" }
                    span { class: "badge difficulty-{tutorial.difficulty}", "{tutorial.difficulty}" }
                    if !description.is_empty() {
                        p { class: "card-description", "{description}" }
                    }
                    div {
                        class: "card-meta",
                        if let Some(category) = tutorial.category.as_ref() {
                            span { "{category}" }
                        }
                        if let Some(duration) = tutorial.duration.as_ref() {
                            span { "{duration}" }
                        }
                        span { "Published {format_date(tutorial.created_at)}" }
                    }
                }
                if is_author {
                    button {
                        class: "secondary danger",
                        disabled: deleting(),
                        onclick: handle_delete,
                        if deleting() { "Deleting..." } else { "Delete" }
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if !tutorial.tags.is_empty() {
                div {
                    class: "chip-row",
                    for tag in tutorial.tags.iter() {
                        span { key: "{tag}", class: "chip", "{tag}" }
                    }
                }
            }

            if let Some(content) = tutorial.content.as_ref() {
                article { class: "tutorial-content", "{content}" }
            }

            div {
                class: "tutorial-links",
                if let Some(url) = tutorial.video_url.as_ref() {
                    a { class: "button secondary", href: "{url}", target: "_blank", "Watch video" }
                }
                if let Some(url) = tutorial.external_url.as_ref() {
                    a { class: "button secondary", href: "{url}", target: "_blank", "Open resource" }
                }
            }
        }
    }
}
