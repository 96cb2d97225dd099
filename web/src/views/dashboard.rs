//! Dashboard: live counts of the signed-in user's communities, projects and
//! events, the unread-message badge, and quick links into each section.

use api::{Community, Event, Project};
use chrono::Utc;
use dioxus::prelude::*;
use ui::{use_auth, ErrorBanner};

use super::format_datetime;
use crate::guards::RequireAuth;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            DashboardPage {}
        }
    }
}

#[component]
fn DashboardPage() -> Element {
    let auth = use_auth();
    let mut communities = use_signal(Vec::<Community>::new);
    let mut projects = use_signal(Vec::<Project>::new);
    let mut events = use_signal(Vec::<Event>::new);
    let mut unread = use_signal(|| 0u32);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let Some(user_id) = auth().user_id() else {
            return;
        };
        loading.set(true);
        error.set(None);
        // Four independent fetches; the first failure is shown, the rest
        // still populate what they can.
        match api::users::communities(user_id).await {
            Ok(page) => communities.set(page.communities),
            Err(err) => {
                tracing::error!("failed to load dashboard communities: {err}");
                error.set(Some(err.to_string()));
            }
        }
        match api::users::projects(user_id).await {
            Ok(page) => projects.set(page.projects),
            Err(err) => tracing::error!("failed to load dashboard projects: {err}"),
        }
        match api::users::events(user_id).await {
            Ok(page) => events.set(page.events),
            Err(err) => tracing::error!("failed to load dashboard events: {err}"),
        }
        match api::messages::unread_count().await {
            Ok(count) => unread.set(count.unread_count),
            Err(err) => tracing::warn!("failed to load unread count: {err}"),
        }
        loading.set(false);
    });

    let name = auth()
        .user
        .map(|user| user.first_name)
        .unwrap_or_default();
    let now = Utc::now();
    let mut upcoming: Vec<Event> = events()
        .into_iter()
        .filter(|event| event.start_time > now)
        .collect();
    upcoming.sort_by_key(|event| event.start_time);

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { "Welcome back, {name}!" }
                    p { "Here's what's happening across your campus" }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "stat-grid",
                StatCard {
                    label: "My Communities",
                    value: communities().len() as u32,
                    to: Route::Communities {},
                }
                StatCard {
                    label: "My Projects",
                    value: projects().len() as u32,
                    to: Route::Projects {},
                }
                StatCard {
                    label: "My Events",
                    value: events().len() as u32,
                    to: Route::Events {},
                }
                StatCard {
                    label: "Unread Messages",
                    value: unread(),
                    to: Route::Messages {},
                }
            }

            div {
                class: "dashboard-columns",
                section {
                    class: "dashboard-panel",
                    h2 { "Upcoming events" }
                    if loading() {
                        p { class: "muted", "Loading..." }
                    } else if upcoming.is_empty() {
                        p { class: "muted", "Nothing on your calendar" }
                    } else {
                        ul {
                            class: "dashboard-list",
                            for event in upcoming.into_iter().take(5) {
                                li {
                                    key: "{event.id}",
                                    Link {
                                        to: Route::EventDetail { id: event.id },
                                        span { "{event.title}" }
                                        span { class: "muted", "{format_datetime(Some(event.start_time))}" }
                                    }
                                }
                            }
                        }
                    }
                }
                section {
                    class: "dashboard-panel",
                    h2 { "My communities" }
                    if loading() {
                        p { class: "muted", "Loading..." }
                    } else if communities().is_empty() {
                        p {
                            class: "muted",
                            "You haven't joined any communities yet. "
                            Link { to: Route::Communities {}, "Browse communities" }
                        }
                    } else {
                        ul {
                            class: "dashboard-list",
                            for community in communities().into_iter().take(5) {
                                li {
                                    key: "{community.id}",
                                    Link {
                                        to: Route::CommunityDetail { id: community.id },
                                        span { "{community.name}" }
                                        span { class: "muted", "{community.members_count} members" }
                                    }
                                }
                            }
                        }
                    }
                }
                section {
                    class: "dashboard-panel",
                    h2 { "My projects" }
                    if loading() {
                        p { class: "muted", "Loading..." }
                    } else if projects().is_empty() {
                        p {
                            class: "muted",
                            "No projects yet. "
                            Link { to: Route::Projects {}, "Find a team" }
                        }
                    } else {
                        ul {
                            class: "dashboard-list",
                            for project in projects().into_iter().take(5) {
                                li {
                                    key: "{project.id}",
                                    Link {
                                        to: Route::ProjectDetail { id: project.id },
                                        span { "{project.title}" }
                                        if let Some(status) = project.status {
                                            span { class: "badge status-{status}", "{status}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u32, to: Route) -> Element {
    rsx! {
        Link {
            to,
            div {
                class: "stat-card",
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
            }
        }
    }
}
