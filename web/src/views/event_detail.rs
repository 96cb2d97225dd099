//! Event detail: schedule, attendee roster, and the register/unregister
//! control. The availability check is computed locally from the fetched
//! timestamps, but a backend rejection always wins and is shown verbatim.

use api::{Event, User};
use chrono::Utc;
use dioxus::prelude::*;
use ui::{use_auth, EmptyState, ErrorBanner};

use super::format_datetime;
use crate::guards::{PageSpinner, RequireAuth};
use crate::Route;

#[component]
pub fn EventDetail(id: u64) -> Element {
    rsx! {
        RequireAuth {
            EventDetailPage { id }
        }
    }
}

#[component]
fn EventDetailPage(id: u64) -> Element {
    let auth = use_auth();
    let mut event = use_signal(|| Option::<Event>::None);
    let mut attendees = use_signal(Vec::<User>::new);
    let mut not_found = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        reload();
        error.set(None);
        match api::events::get(id).await {
            Ok(found) => {
                event.set(Some(found));
                not_found.set(false);
            }
            Err(err) if err.is_not_found() => {
                not_found.set(true);
                return;
            }
            Err(err) => {
                tracing::error!("failed to load event {id}: {err}");
                error.set(Some(err.to_string()));
                return;
            }
        }
        match api::events::attendees(id).await {
            Ok(roster) => attendees.set(roster.attendees),
            Err(err) => tracing::warn!("failed to load attendees for event {id}: {err}"),
        }
    });

    let user_id = auth().user_id();
    let is_registered = attendees()
        .iter()
        .any(|attendee| Some(attendee.id) == user_id);

    let mut change_registration = move |registering: bool| {
        spawn(async move {
            busy.set(true);
            error.set(None);
            let result = if registering {
                api::events::register(id).await
            } else {
                api::events::unregister(id).await
            };
            match result {
                Ok(()) => reload += 1,
                Err(err) => {
                    tracing::error!("registration change failed: {err}");
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
                    title: "Event not found",
                    hint: "It may have been cancelled",
                }
                Link { to: Route::Events {}, class: "button secondary", "Back to events" }
            }
        };
    }

    let Some(event) = event() else {
        return rsx! {
            PageSpinner {}
        };
    };
    let availability = event.availability(Utc::now());
    let description = event
        .description
        .clone()
        .unwrap_or_else(|| "No description yet".to_string());
    let location = event
        .location
        .clone()
        .unwrap_or_else(|| "Location TBA".to_string());

    rsx! {
        div {
            class: "page detail-page",
            div {
                class: "detail-header",
                div {
                    h1 { "{event.title}" }
                    if let Some(kind) = event.event_type.as_ref() {
                        span { class: "badge", "{kind}" }
                    }
                    p { class: "card-description", "{description}" }
                }
                if is_registered {
                    button {
                        class: "secondary",
                        disabled: busy(),
                        onclick: move |_| change_registration(false),
                        "Cancel registration"
                    }
                } else if let Some(reason) = availability.blocked_reason() {
                    button { class: "primary", disabled: true, "{reason}" }
                } else {
                    button {
                        class: "primary",
                        disabled: busy(),
                        onclick: move |_| change_registration(true),
                        "Register"
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
                    dl {
                        class: "event-schedule",
                        dt { "Starts" }
                        dd { "{format_datetime(Some(event.start_time))}" }
                        if event.end_time.is_some() {
                            dt { "Ends" }
                            dd { "{format_datetime(event.end_time)}" }
                        }
                        if event.registration_deadline.is_some() {
                            dt { "Register by" }
                            dd { "{format_datetime(event.registration_deadline)}" }
                        }
                        dt { "Location" }
                        dd { "{location}" }
                        dt { "Capacity" }
                        dd {
                            if let Some(max) = event.max_attendees {
                                "{event.attendees_count} of {max} spots taken"
                            } else {
                                "{event.attendees_count} attending, no limit"
                            }
                        }
                    }
                }
                aside {
                    class: "detail-side",
                    h2 { "Attendees" }
                    if attendees().is_empty() {
                        p { class: "muted", "No one has registered yet" }
                    } else {
                        ul {
                            class: "member-list",
                            for attendee in attendees() {
                                li { key: "{attendee.id}", "{attendee.display_name()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
