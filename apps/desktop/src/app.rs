//! Root application component — switches between the search and profile pages.

use dioxus::prelude::*;

use crate::profile::ProfilePage;
use crate::search::SearchPage;
use crate::state::*;
use crate::INITIAL_CONFIG;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_hook(|| {
        let taken = INITIAL_CONFIG.lock().ok().and_then(|mut slot| slot.take());
        if let Some(config) = taken {
            *CONFIG.write() = config;
        }
    });

    let page = *PAGE.read();

    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            {match page {
                Page::Search => rsx! { SearchPage {} },
                Page::Profile => rsx! { ProfilePage {} },
            }}
            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let config = CONFIG.read();
    let selected = SESSION.read().selected_user_id();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-api", "{config.api_url}" }
            if let Some(id) = selected {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-selected", "selected UserID {id}" }
            }
        }
    }
}
