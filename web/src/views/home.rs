//! Public landing page.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "page home",
            section {
                class: "hero",
                h1 { "Find your people. Build something together." }
                p {
                    "StudentConnect brings communities, projects, events and tutorials "
                    "from across campus into one place."
                }
                div {
                    class: "hero-actions",
                    if auth().is_authenticated() {
                        Link { class: "button primary", to: Route::Dashboard {}, "Go to your dashboard" }
                    } else {
                        Link { class: "button primary", to: Route::Register {}, "Create an account" }
                        Link { class: "button secondary", to: Route::Login {}, "Sign in" }
                    }
                }
            }

            section {
                class: "feature-grid",
                div {
                    class: "card feature",
                    h3 { "Communities" }
                    p { "Join interest groups, share posts and keep up with what your peers are into." }
                }
                div {
                    class: "card feature",
                    h3 { "Projects" }
                    p { "Recruit teammates for hackathons, coursework and side projects." }
                }
                div {
                    class: "card feature",
                    h3 { "Events" }
                    p { "Workshops, socials and seminars — register before the seats run out." }
                }
                div {
                    class: "card feature",
                    h3 { "Tutorials" }
                    p { "Learn from tutorials written by students who just solved the same problem." }
                }
            }
        }
    }
}
