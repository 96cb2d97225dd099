//! Events list: type and status filters, create dialog with
//! `datetime-local` inputs passed through to the backend as-is.

use api::{Event, NewEvent};
use chrono::Utc;
use dioxus::prelude::*;
use ui::{EmptyState, ErrorBanner, LoadingCards, ModalOverlay, Pagination};

use super::format_datetime;
use crate::guards::RequireAuth;
use crate::Route;

const EVENT_TYPES: &[(&str, &str)] = &[
    ("workshop", "Workshop"),
    ("hackathon", "Hackathon"),
    ("seminar", "Seminar"),
    ("social", "Social"),
    ("career_fair", "Career Fair"),
];

#[component]
pub fn Events() -> Element {
    rsx! {
        RequireAuth {
            EventsPage {}
        }
    }
}

#[component]
fn EventsPage() -> Element {
    let mut events = use_signal(Vec::<Event>::new);
    let mut pages = use_signal(|| 1u32);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut page = use_signal(|| 1u32);
    let mut event_type = use_signal(String::new);
    let mut status = use_signal(|| "upcoming".to_string());
    let mut search = use_signal(String::new);
    let mut show_create = use_signal(|| false);

    let mut loader = use_resource(move || async move {
        loading.set(true);
        error.set(None);
        let kind = event_type();
        let kind = (!kind.is_empty()).then_some(kind);
        let when = status();
        let when = (!when.is_empty()).then_some(when);
        match api::events::list(page(), kind.as_deref(), when.as_deref()).await {
            Ok(listing) => {
                events.set(listing.events);
                pages.set(listing.pages);
            }
            Err(err) => {
                tracing::error!("failed to load events: {err}");
                error.set(Some(err.to_string()));
            }
        }
        loading.set(false);
    });

    let term = search();
    let visible: Vec<Event> = events()
        .into_iter()
        .filter(|event| matches_search(event, &term))
        .collect();
    let filtered = !term.is_empty() || !event_type().is_empty();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { "Events" }
                    p { "Workshops, hackathons, and everything in between" }
                }
                button {
                    class: "primary",
                    onclick: move |_| show_create.set(true),
                    "Create Event"
                }
            }

            div {
                class: "filter-bar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search events...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: event_type(),
                    onchange: move |evt| {
                        event_type.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All Types" }
                    for (value, label) in EVENT_TYPES {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
                select {
                    value: status(),
                    onchange: move |evt| {
                        status.set(evt.value());
                        page.set(1);
                    },
                    option { value: "upcoming", "Upcoming" }
                    option { value: "past", "Past" }
                    option { value: "", "All" }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if loading() {
                LoadingCards {}
            } else if visible.is_empty() {
                EmptyState {
                    title: "No events found",
                    hint: if filtered {
                        "Try adjusting your search or filter criteria"
                    } else {
                        "Nothing scheduled yet — create the first event!"
                    },
                }
            } else {
                div {
                    class: "card-grid",
                    for event in visible {
                        EventCard { key: "{event.id}", event }
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
                    CreateEventDialog {
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
fn EventCard(event: Event) -> Element {
    let availability = event.availability(Utc::now());
    let location = event
        .location
        .clone()
        .unwrap_or_else(|| "Location TBA".to_string());

    rsx! {
        Link {
            to: Route::EventDetail { id: event.id },
            div {
                class: "card",
                div {
                    class: "card-title-row",
                    h3 { "{event.title}" }
                    if let Some(kind) = event.event_type.as_ref() {
                        span { class: "badge", "{type_label(kind)}" }
                    }
                }
                div {
                    class: "card-meta",
                    span { "{format_datetime(Some(event.start_time))}" }
                    span { "{location}" }
                }
                div {
                    class: "card-meta",
                    span {
                        if let Some(max) = event.max_attendees {
                            "{event.attendees_count}/{max} attending"
                        } else {
                            "{event.attendees_count} attending"
                        }
                    }
                    if let Some(reason) = availability.blocked_reason() {
                        span { class: "muted", "{reason}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateEventDialog(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut event_type = use_signal(|| "workshop".to_string());
    let mut location = use_signal(String::new);
    let mut start_time = use_signal(String::new);
    let mut end_time = use_signal(String::new);
    let mut registration_deadline = use_signal(String::new);
    let mut max_attendees = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let request = NewEvent {
            title: title().trim().to_string(),
            description: description(),
            event_type: event_type(),
            location: location(),
            start_time: start_time(),
            end_time: (!end_time().is_empty()).then(|| end_time()),
            registration_deadline: (!registration_deadline().is_empty())
                .then(|| registration_deadline()),
            max_attendees: max_attendees().parse().ok(),
        };
        if request.title.is_empty() || request.start_time.is_empty() {
            error.set(Some("Title and start time are required".to_string()));
            return;
        }
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match api::events::create(&request).await {
                Ok(_) => on_created.call(()),
                Err(err) => {
                    tracing::error!("failed to create event: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "dialog-body",
            h2 { "New Event" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "form-field",
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Intro to Systems Programming",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    rows: 3,
                    placeholder: "What should attendees expect?",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Type" }
                    select {
                        value: event_type(),
                        onchange: move |evt| event_type.set(evt.value()),
                        for (value, label) in EVENT_TYPES {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Location" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. Engineering Hall 204",
                        value: location(),
                        oninput: move |evt| location.set(evt.value()),
                    }
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Starts" }
                    input {
                        r#type: "datetime-local",
                        value: start_time(),
                        oninput: move |evt| start_time.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Ends (optional)" }
                    input {
                        r#type: "datetime-local",
                        value: end_time(),
                        oninput: move |evt| end_time.set(evt.value()),
                    }
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Registration deadline (optional)" }
                    input {
                        r#type: "datetime-local",
                        value: registration_deadline(),
                        oninput: move |evt| registration_deadline.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Max attendees (optional)" }
                    input {
                        r#type: "number",
                        min: 1,
                        value: max_attendees(),
                        oninput: move |evt| max_attendees.set(evt.value()),
                    }
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: title().trim().is_empty() || start_time().is_empty() || submitting(),
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

fn type_label(kind: &str) -> &str {
    EVENT_TYPES
        .iter()
        .find(|(value, _)| *value == kind)
        .map(|(_, label)| *label)
        .unwrap_or(kind)
}

/// Case-insensitive title/description match over the loaded page only; the
/// server never sees the term.
fn matches_search(event: &Event, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    event.title.to_lowercase().contains(&term)
        || event
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(title: &str, description: &str) -> Event {
        Event {
            id: 1,
            title: title.to_string(),
            description: Some(description.to_string()),
            event_type: None,
            location: None,
            start_time: Utc.with_ymd_and_hms(2026, 9, 1, 18, 0, 0).unwrap(),
            end_time: None,
            registration_deadline: None,
            max_attendees: None,
            attendees_count: 0,
            image_url: None,
            creator_id: None,
            created_at: None,
        }
    }

    #[test]
    fn type_labels_fall_back_to_raw_value() {
        assert_eq!(type_label("career_fair"), "Career Fair");
        assert_eq!(type_label("meetup"), "meetup");
    }

    #[test]
    fn search_matches_title_and_description() {
        let hack = event("Fall Hackathon", "48 hours of building with free pizza");
        assert!(matches_search(&hack, ""));
        assert!(matches_search(&hack, "hackathon"));
        assert!(matches_search(&hack, "PIZZA"));
        assert!(!matches_search(&hack, "seminar"));
    }
}
