//! Tutorials list: server-side category/difficulty filters + pagination,
//! client-side search over the loaded page, create dialog with a tag chip
//! editor.

use api::{NewTutorial, Tutorial};
use dioxus::prelude::*;
use ui::{EmptyState, ErrorBanner, LoadingCards, ModalOverlay, Pagination};

use crate::guards::RequireAuth;
use crate::Route;

const DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];

/// Shown until the categories endpoint answers (or when it fails).
const DEFAULT_CATEGORIES: &[&str] = &[
    "Programming",
    "Web Development",
    "Data Science",
    "Design",
    "DevOps",
    "Mobile",
];

#[component]
pub fn Tutorials() -> Element {
    rsx! {
        RequireAuth {
            TutorialsPage {}
        }
    }
}

#[component]
fn TutorialsPage() -> Element {
    let mut tutorials = use_signal(Vec::<Tutorial>::new);
    let mut pages = use_signal(|| 1u32);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut page = use_signal(|| 1u32);
    let mut category = use_signal(String::new);
    let mut difficulty = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut show_create = use_signal(|| false);

    let mut categories = use_signal(|| {
        DEFAULT_CATEGORIES
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
    });
    let _categories_loader = use_resource(move || async move {
        match api::tutorials::categories().await {
            Ok(list) if !list.categories.is_empty() => categories.set(list.categories),
            Ok(_) => {}
            Err(err) => tracing::warn!("failed to load tutorial categories: {err}"),
        }
    });

    let mut loader = use_resource(move || async move {
        loading.set(true);
        error.set(None);
        let selected = category();
        let cat = (!selected.is_empty()).then_some(selected);
        let level = difficulty();
        let level = (!level.is_empty()).then_some(level);
        match api::tutorials::list(page(), cat.as_deref(), level.as_deref()).await {
            Ok(listing) => {
                tutorials.set(listing.tutorials);
                pages.set(listing.pages);
            }
            Err(err) => {
                tracing::error!("failed to load tutorials: {err}");
                error.set(Some(err.to_string()));
            }
        }
        loading.set(false);
    });

    let term = search();
    let visible: Vec<Tutorial> = tutorials()
        .into_iter()
        .filter(|tutorial| matches_search(tutorial, &term))
        .collect();
    let filtered = !term.is_empty() || !category().is_empty() || !difficulty().is_empty();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { "Tutorials" }
                    p { "Learn from other students, teach what you know" }
                }
                button {
                    class: "primary",
                    onclick: move |_| show_create.set(true),
                    "Share Tutorial"
                }
            }

            div {
                class: "filter-bar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search tutorials...",
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
                    for name in categories() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
                select {
                    value: difficulty(),
                    onchange: move |evt| {
                        difficulty.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Levels" }
                    for level in DIFFICULTIES {
                        option { key: "{level}", value: "{level}", "{capitalize(level)}" }
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
                    title: "No tutorials found",
                    hint: if filtered {
                        "Try adjusting your search or filter criteria"
                    } else {
                        "Share the first tutorial!"
                    },
                }
            } else {
                div {
                    class: "card-grid",
                    for tutorial in visible {
                        TutorialCard { key: "{tutorial.id}", tutorial }
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
                    CreateTutorialDialog {
                        categories: categories(),
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
fn TutorialCard(tutorial: Tutorial) -> Element {
    let description = tutorial
        .description
        .clone()
        .unwrap_or_else(|| "No description yet".to_string());

    rsx! {
        Link {
            to: Route::TutorialDetail { id: tutorial.id },
            div {
                class: "card",
                div {
                    class: "card-title-row",
                    h3 { "{tutorial.title}" }
                    span {
                        class: "badge difficulty-{tutorial.difficulty}",
                        "{capitalize(&tutorial.difficulty)}"
                    }
                }
                p { class: "card-description", "{description}" }
                if !tutorial.tags.is_empty() {
                    div {
                        class: "chip-row",
                        for tag in tutorial.tags.iter().take(4) {
                            span { key: "{tag}", class: "chip", "{tag}" }
                        }
                    }
                }
                div {
                    class: "card-meta",
                    if let Some(category) = tutorial.category.as_ref() {
                        span { "{category}" }
                    }
                    if let Some(duration) = tutorial.duration.as_ref() {
                        span { "{duration}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateTutorialDialog(
    categories: Vec<String>,
    on_created: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(NewTutorial::default);
    let mut tag_input = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let mut add_tag = move || {
        let entry = tag_input().trim().to_string();
        if !entry.is_empty() && !draft().tags.contains(&entry) {
            draft.write().tags.push(entry);
            tag_input.set(String::new());
        }
    };

    let handle_submit = move |_| {
        let mut request = draft();
        request.title = request.title.trim().to_string();
        if request.title.is_empty() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match api::tutorials::create(&request).await {
                Ok(_) => on_created.call(()),
                Err(err) => {
                    tracing::error!("failed to create tutorial: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "dialog-body",
            h2 { "Share a Tutorial" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "form-field",
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Getting started with Git",
                    value: draft().title,
                    oninput: move |evt| draft.write().title = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    rows: 2,
                    placeholder: "One or two sentences on what this covers",
                    value: draft().description,
                    oninput: move |evt| draft.write().description = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Content" }
                textarea {
                    rows: 6,
                    placeholder: "The tutorial itself, or notes to go with the links below",
                    value: draft().content,
                    oninput: move |evt| draft.write().content = evt.value(),
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Category" }
                    select {
                        value: draft().category,
                        onchange: move |evt| draft.write().category = evt.value(),
                        option { value: "", "Pick a category" }
                        for name in categories {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Difficulty" }
                    select {
                        value: draft().difficulty,
                        onchange: move |evt| draft.write().difficulty = evt.value(),
                        for level in DIFFICULTIES {
                            option { key: "{level}", value: "{level}", "{capitalize(level)}" }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Duration" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. 30 min",
                        value: draft().duration,
                        oninput: move |evt| draft.write().duration = evt.value(),
                    }
                }
            }
            div {
                class: "form-field",
                label { "Tags" }
                div {
                    class: "chip-input",
                    input {
                        r#type: "text",
                        placeholder: "Add a tag",
                        value: tag_input(),
                        oninput: move |evt| tag_input.set(evt.value()),
                        onkeypress: move |evt| {
                            if evt.key() == Key::Enter {
                                add_tag();
                            }
                        },
                    }
                    button { class: "secondary", onclick: move |_| add_tag(), "Add" }
                }
                div {
                    class: "chip-row",
                    for tag in draft().tags {
                        span {
                            key: "{tag}",
                            class: "chip removable",
                            onclick: {
                                let tag = tag.clone();
                                move |_| draft.write().tags.retain(|t| t != &tag)
                            },
                            "{tag} ×"
                        }
                    }
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Video URL (optional)" }
                    input {
                        r#type: "url",
                        value: draft().video_url,
                        oninput: move |evt| draft.write().video_url = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { "External URL (optional)" }
                    input {
                        r#type: "url",
                        value: draft().external_url,
                        oninput: move |evt| draft.write().external_url = evt.value(),
                    }
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: draft().title.trim().is_empty() || submitting(),
                    onclick: handle_submit,
                    if submitting() { "Publishing..." } else { "Publish" }
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

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Case-insensitive title/description match over the loaded page only; the
/// server never sees the term.
fn matches_search(tutorial: &Tutorial, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    tutorial.title.to_lowercase().contains(&term)
        || tutorial
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial(title: &str, description: &str) -> Tutorial {
        Tutorial {
            id: 1,
            title: title.to_string(),
            description: Some(description.to_string()),
            content: None,
            category: None,
            difficulty: "beginner".to_string(),
            duration: None,
            tags: Vec::new(),
            video_url: None,
            external_url: None,
            image_url: None,
            creator_id: None,
            created_at: None,
        }
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("beginner"), "Beginner");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn search_matches_title_and_description() {
        let git = tutorial("Intro to Git", "Branching and rebasing basics");
        assert!(matches_search(&git, ""));
        assert!(matches_search(&git, "git"));
        assert!(matches_search(&git, "REBASING"));
        assert!(!matches_search(&git, "docker"));
    }
}
