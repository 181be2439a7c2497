use dioxus::prelude::*;

use ui::{Footer, LogoutLink, Navbar, SessionProvider};
use views::{Dashboard, HabitLists, Home, Leaderboard, Login, Profile, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/sign-up")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[route("/leaderboard")]
    Leaderboard {},
    #[route("/habit-lists")]
    HabitLists {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar + page body + footer around every route.
#[component]
fn Shell() -> Element {
    let session = ui::use_session();

    rsx! {
        Navbar {
            Link { class: "navbar-link", to: Route::Home {}, "Home" }
            Link { class: "navbar-link", to: Route::Profile {}, "Profile" }
            Link { class: "navbar-link", to: Route::Dashboard {}, "Dashboard" }
            Link { class: "navbar-link", to: Route::Leaderboard {}, "Leaderboard" }
            if session().logged_in() {
                LogoutLink {}
            } else {
                Link { class: "navbar-link", to: Route::Login {}, "Login" }
            }
        }

        Outlet::<Route> {}

        Footer {}
    }
}
