//! Communities list: server-side category filter + pagination, client-side
//! search over the loaded page, create dialog.

use api::{Community, NewCommunity};
use dioxus::prelude::*;
use ui::{EmptyState, ErrorBanner, LoadingCards, ModalOverlay, Pagination};

use super::format_date;
use crate::guards::RequireAuth;
use crate::Route;

const CATEGORIES: &[&str] = &[
    "Academic",
    "Arts",
    "Career",
    "Gaming",
    "Science",
    "Social",
    "Sports",
    "Technology",
];

#[component]
pub fn Communities() -> Element {
    rsx! {
        RequireAuth {
            CommunitiesPage {}
        }
    }
}

#[component]
fn CommunitiesPage() -> Element {
    let mut communities = use_signal(Vec::<Community>::new);
    let mut pages = use_signal(|| 1u32);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut page = use_signal(|| 1u32);
    let mut category = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut show_create = use_signal(|| false);

    let mut loader = use_resource(move || async move {
        loading.set(true);
        error.set(None);
        let selected = category();
        let filter = (!selected.is_empty()).then_some(selected);
        match api::communities::list(page(), filter.as_deref()).await {
            Ok(listing) => {
                communities.set(listing.communities);
                pages.set(listing.pages);
            }
            Err(err) => {
                tracing::error!("failed to load communities: {err}");
                error.set(Some(err.to_string()));
            }
        }
        loading.set(false);
    });

    let term = search();
    let visible: Vec<Community> = communities()
        .into_iter()
        .filter(|community| matches_search(community, &term))
        .collect();
    let filtered = !term.is_empty() || !category().is_empty();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { "Communities" }
                    p { "Find your people across campus" }
                }
                button {
                    class: "primary",
                    onclick: move |_| show_create.set(true),
                    "Create Community"
                }
            }

            div {
                class: "filter-bar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search communities...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: category(),
                    onchange: move |evt| {
                        category.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Categories" }
                    for name in CATEGORIES {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if loading() {
                LoadingCards {}
            } else if visible.is_empty() {
                EmptyState {
                    title: "No communities found",
                    hint: if filtered {
                        "Try adjusting your search or filter criteria"
                    } else {
                        "Be the first to create a community!"
                    },
                }
            } else {
                div {
                    class: "card-grid",
                    for community in visible {
                        CommunityCard { key: "{community.id}", community }
                    }
                }
            }

            Pagination {
                page: page(),
                pages: pages(),
                on_change: move |next| page.set(next),
            }

            if show_create() {
                ModalOverlay {
                    on_close: move |_| show_create.set(false),
                    CreateCommunityDialog {
                        on_created: move |_| {
                            show_create.set(false);
                            loader.restart();
                        },
                        on_cancel: move |_| show_create.set(false),
                    }
                }
            }
        }
    }
}

#[component]
fn CommunityCard(community: Community) -> Element {
    let description = community
        .description
        .clone()
        .unwrap_or_else(|| "No description yet".to_string());

    rsx! {
        Link {
            to: Route::CommunityDetail { id: community.id },
            div {
                class: "card",
                div {
                    class: "card-title-row",
                    h3 { "{community.name}" }
                    if let Some(category) = community.category.as_ref() {
                        span { class: "badge", "{category}" }
                    }
                }
                p { class: "card-description", "{description}" }
                div {
                    class: "card-meta",
                    span { "{community.members_count} members" }
                    span { "{format_date(community.created_at)}" }
                }
            }
        }
    }
}

#[component]
fn CreateCommunityDialog(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let request = NewCommunity {
            name: name().trim().to_string(),
            description: description(),
            category: category(),
        };
        if request.name.is_empty() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match api::communities::create(&request).await {
                Ok(_) => on_created.call(()),
                Err(err) => {
                    tracing::error!("failed to create community: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "dialog-body",
            h2 { "New Community" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "form-field",
                label { "Name" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Robotics Society",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    rows: 3,
                    placeholder: "What is this community about?",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Category" }
                select {
                    value: category(),
                    onchange: move |evt| category.set(evt.value()),
                    option { value: "", "Pick a category" }
                    for name in CATEGORIES {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: name().trim().is_empty() || submitting(),
                    onclick: handle_submit,
                    if submitting() { "Creating..." } else { "Create" }
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// Case-insensitive title/description match. Only filters the page that is
/// already loaded; the server never sees the term.
fn matches_search(community: &Community, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    community.name.to_lowercase().contains(&term)
        || community
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn community(name: &str, description: &str) -> Community {
        Community {
            id: 1,
            name: name.to_string(),
            description: Some(description.to_string()),
            category: None,
            image_url: None,
            members_count: 0,
            creator_id: None,
            created_at: None,
        }
    }

    #[test]
    fn search_matches_name_and_description() {
        let chess = community("Chess Club", "Weekly blitz nights");
        assert!(matches_search(&chess, ""));
        assert!(matches_search(&chess, "chess"));
        assert!(matches_search(&chess, "BLITZ"));
        assert!(!matches_search(&chess, "robotics"));
    }
}
