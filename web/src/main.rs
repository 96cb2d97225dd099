use dioxus::prelude::*;

use ui::AuthProvider;

use navbar::Shell;
use views::{
    Communities, CommunityDetail, Dashboard, EventDetail, Events, Home, Login, Messages, Profile,
    ProjectDetail, Projects, Register, TutorialDetail, Tutorials,
};

mod guards;
mod navbar;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/communities")]
        Communities {},
        #[route("/communities/:id")]
        CommunityDetail { id: u64 },
        #[route("/projects")]
        Projects {},
        #[route("/projects/:id")]
        ProjectDetail { id: u64 },
        #[route("/events")]
        Events {},
        #[route("/events/:id")]
        EventDetail { id: u64 },
        #[route("/tutorials")]
        Tutorials {},
        #[route("/tutorials/:id")]
        TutorialDetail { id: u64 },
        #[route("/messages")]
        Messages {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Unknown paths fall back to the landing page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
