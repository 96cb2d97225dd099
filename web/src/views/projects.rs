//! Projects list: status filter, page search, create dialog with tech-stack
//! and looking-for chip editors.

use api::{NewProject, Project};
use dioxus::prelude::*;
use ui::{EmptyState, ErrorBanner, LoadingCards, ModalOverlay, Pagination};

use crate::guards::RequireAuth;
use crate::Route;

const STATUSES: &[(&str, &str)] = &[
    ("open", "Open"),
    ("in_progress", "In Progress"),
    ("completed", "Completed"),
];

#[component]
pub fn Projects() -> Element {
    rsx! {
        RequireAuth {
            ProjectsPage {}
        }
    }
}

#[component]
fn ProjectsPage() -> Element {
    let mut projects = use_signal(Vec::<Project>::new);
    let mut pages = use_signal(|| 1u32);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut page = use_signal(|| 1u32);
    let mut status = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut show_create = use_signal(|| false);

    let mut loader = use_resource(move || async move {
        loading.set(true);
        error.set(None);
        let selected = status();
        let filter = (!selected.is_empty()).then_some(selected);
        match api::projects::list(page(), filter.as_deref()).await {
            Ok(listing) => {
                projects.set(listing.projects);
                pages.set(listing.pages);
            }
            Err(err) => {
                tracing::error!("failed to load projects: {err}");
                error.set(Some(err.to_string()));
            }
        }
        loading.set(false);
    });

    let term = search();
    let visible: Vec<Project> = projects()
        .into_iter()
        .filter(|project| matches_search(project, &term))
        .collect();
    let filtered = !term.is_empty() || !status().is_empty();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { "Projects" }
                    p { "Team up and build something real" }
                }
                button {
                    class: "primary",
                    onclick: move |_| show_create.set(true),
                    "Create Project"
                }
            }

            div {
                class: "filter-bar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search projects...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: status(),
                    onchange: move |evt| {
                        status.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Statuses" }
                    for (value, label) in STATUSES {
                        option { key: "{value}", value: "{value}", "{label}" }
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
                    title: "No projects found",
                    hint: if filtered {
                        "Try adjusting your search or filter criteria"
                    } else {
                        "Be the first to post a project!"
                    },
                }
            } else {
                div {
                    class: "card-grid",
                    for project in visible {
                        ProjectCard { key: "{project.id}", project }
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
                    CreateProjectDialog {
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
fn ProjectCard(project: Project) -> Element {
    let description = project
        .description
        .clone()
        .unwrap_or_else(|| "No description yet".to_string());

    rsx! {
        Link {
            to: Route::ProjectDetail { id: project.id },
            div {
                class: "card",
                div {
                    class: "card-title-row",
                    h3 { "{project.title}" }
                    if let Some(status) = project.status.as_ref() {
                        span { class: "badge status-{status}", "{status_label(status)}" }
                    }
                }
                p { class: "card-description", "{description}" }
                if !project.tech_stack.is_empty() {
                    div {
                        class: "chip-row",
                        for tech in project.tech_stack.iter().take(4) {
                            span { key: "{tech}", class: "chip", "{tech}" }
                        }
                    }
                }
                div {
                    class: "card-meta",
                    span { "{project.members_count} members" }
                    if !project.looking_for.is_empty() {
                        span { "Looking for {project.looking_for.join(\", \")}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateProjectDialog(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut status = use_signal(|| "open".to_string());
    let mut github_url = use_signal(String::new);
    let mut tech_stack = use_signal(Vec::<String>::new);
    let mut tech_input = use_signal(String::new);
    let mut looking_for = use_signal(Vec::<String>::new);
    let mut role_input = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let mut add_tech = move || {
        let entry = tech_input().trim().to_string();
        if !entry.is_empty() && !tech_stack().contains(&entry) {
            tech_stack.write().push(entry);
            tech_input.set(String::new());
        }
    };
    let mut add_role = move || {
        let entry = role_input().trim().to_string();
        if !entry.is_empty() && !looking_for().contains(&entry) {
            looking_for.write().push(entry);
            role_input.set(String::new());
        }
    };

    let handle_submit = move |_| {
        let request = NewProject {
            title: title().trim().to_string(),
            description: description(),
            status: status(),
            tech_stack: tech_stack(),
            looking_for: looking_for(),
            github_url: github_url(),
        };
        if request.title.is_empty() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match api::projects::create(&request).await {
                Ok(_) => on_created.call(()),
                Err(err) => {
                    tracing::error!("failed to create project: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "dialog-body",
            h2 { "New Project" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "form-field",
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Campus Ride Share",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    rows: 3,
                    placeholder: "What are you building?",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Status" }
                select {
                    value: status(),
                    onchange: move |evt| status.set(evt.value()),
                    for (value, label) in STATUSES {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
            div {
                class: "form-field",
                label { "Tech stack" }
                div {
                    class: "chip-input",
                    input {
                        r#type: "text",
                        placeholder: "Add a technology",
                        value: tech_input(),
                        oninput: move |evt| tech_input.set(evt.value()),
                        onkeypress: move |evt| {
                            if evt.key() == Key::Enter {
                                add_tech();
                            }
                        },
                    }
                    button { class: "secondary", onclick: move |_| add_tech(), "Add" }
                }
                div {
                    class: "chip-row",
                    for tech in tech_stack() {
                        span {
                            key: "{tech}",
                            class: "chip removable",
                            onclick: {
                                let tech = tech.clone();
                                move |_| tech_stack.write().retain(|t| t != &tech)
                            },
                            "{tech} ×"
                        }
                    }
                }
            }
            div {
                class: "form-field",
                label { "Looking for" }
                div {
                    class: "chip-input",
                    input {
                        r#type: "text",
                        placeholder: "e.g. Backend developer",
                        value: role_input(),
                        oninput: move |evt| role_input.set(evt.value()),
                        onkeypress: move |evt| {
                            if evt.key() == Key::Enter {
                                add_role();
                            }
                        },
                    }
                    button { class: "secondary", onclick: move |_| add_role(), "Add" }
                }
                div {
                    class: "chip-row",
                    for role in looking_for() {
                        span {
                            key: "{role}",
                            class: "chip removable",
                            onclick: {
                                let role = role.clone();
                                move |_| looking_for.write().retain(|r| r != &role)
                            },
                            "{role} ×"
                        }
                    }
                }
            }
            div {
                class: "form-field",
                label { "GitHub URL (optional)" }
                input {
                    r#type: "url",
                    placeholder: "https://github.com/you/project",
                    value: github_url(),
                    oninput: move |evt| github_url.set(evt.value()),
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: title().trim().is_empty() || submitting(),
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

fn status_label(status: &str) -> &str {
    STATUSES
        .iter()
        .find(|(value, _)| *value == status)
        .map(|(_, label)| *label)
        .unwrap_or(status)
}

/// Page-local search, same contract as the communities view.
fn matches_search(project: &Project, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    project.title.to_lowercase().contains(&term)
        || project
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_are_human_readable() {
        assert_eq!(status_label("in_progress"), "In Progress");
        assert_eq!(status_label("archived"), "archived");
    }
}
