//! Project detail: tech stack, open roles, team roster, join/leave.

use api::{Project, User};
use dioxus::prelude::*;
use ui::{use_auth, EmptyState, ErrorBanner};

use super::format_date;
use crate::guards::{PageSpinner, RequireAuth};
use crate::Route;

#[component]
pub fn ProjectDetail(id: u64) -> Element {
    rsx! {
        RequireAuth {
            ProjectDetailPage { id }
        }
    }
}

#[component]
fn ProjectDetailPage(id: u64) -> Element {
    let auth = use_auth();
    let mut project = use_signal(|| Option::<Project>::None);
    let mut members = use_signal(Vec::<User>::new);
    let mut not_found = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        reload();
        error.set(None);
        match api::projects::get(id).await {
            Ok(found) => {
                project.set(Some(found));
                not_found.set(false);
            }
            Err(err) if err.is_not_found() => {
                not_found.set(true);
                return;
            }
            Err(err) => {
                tracing::error!("failed to load project {id}: {err}");
                error.set(Some(err.to_string()));
                return;
            }
        }
        match api::projects::members(id).await {
            Ok(roster) => members.set(roster.members),
            Err(err) => tracing::warn!("failed to load members for project {id}: {err}"),
        }
    });

    let user_id = auth().user_id();
    let is_member = members().iter().any(|member| Some(member.id) == user_id);

    let mut toggle_membership = move |joining: bool| {
        spawn(async move {
            busy.set(true);
            error.set(None);
            let result = if joining {
                api::projects::join(id).await
            } else {
                api::projects::leave(id).await
            };
            match result {
                Ok(()) => reload += 1,
                Err(err) => {
                    tracing::error!("membership change failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    if not_found() {
        return rsx! {
            div {
                class: "page",
                EmptyState {
                    title: "Project not found",
                    hint: "It may have been deleted",
                }
                Link { to: Route::Projects {}, class: "button secondary", "Back to projects" }
            }
        };
    }

    let Some(project) = project() else {
        return rsx! {
            PageSpinner {}
        };
    };
    let description = project
        .description
        .clone()
        .unwrap_or_else(|| "No description yet".to_string());

    rsx! {
        div {
            class: "page detail-page",
            div {
                class: "detail-header",
                div {
                    h1 { "{project.title}" }
                    if let Some(status) = project.status.as_ref() {
                        span { class: "badge status-{status}", "{status}" }
                    }
                    p { class: "card-description", "{description}" }
                    div {
                        class: "card-meta",
                        span { "Started {format_date(project.created_at)}" }
                        if let Some(url) = project.github_url.as_ref() {
                            a { href: "{url}", target: "_blank", "View on GitHub" }
                        }
                    }
                }
                if is_member {
                    button {
                        class: "secondary",
                        disabled: busy(),
                        onclick: move |_| toggle_membership(false),
                        "Leave team"
                    }
                } else {
                    button {
                        class: "primary",
                        disabled: busy(),
                        onclick: move |_| toggle_membership(true),
                        "Join team"
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "detail-columns",
                div {
                    class: "detail-main",
                    if !project.tech_stack.is_empty() {
                        section {
                            h2 { "Tech stack" }
                            div {
                                class: "chip-row",
                                for tech in project.tech_stack.iter() {
                                    span { key: "{tech}", class: "chip", "{tech}" }
                                }
                            }
                        }
                    }
                    if !project.looking_for.is_empty() {
                        section {
                            h2 { "Open roles" }
                            div {
                                class: "chip-row",
                                for role in project.looking_for.iter() {
                                    span { key: "{role}", class: "chip", "{role}" }
                                }
                            }
                        }
                    }
                }
                aside {
                    class: "detail-side",
                    h2 { "Team" }
                    if members().is_empty() {
                        p { class: "muted", "No members yet" }
                    } else {
                        ul {
                            class: "member-list",
                            for member in members() {
                                li { key: "{member.id}", "{member.display_name()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
