//! Profile page — shows the user selected through the view-profile form.

use dioxus::prelude::*;
use usersearch_core::{FormOutcome, Navigator};

use crate::search::OutcomeView;
use crate::state::*;

#[component]
pub fn ProfilePage() -> Element {
    let selected = SESSION.read().selected_user_id();

    let profile = use_resource(move || async move {
        let selected = SESSION.read().selected_user_id();
        match selected {
            Some(id) => with_panel(move |panel| panel.lookup_by_id(id))
                .await
                .unwrap_or_else(FormOutcome::Failed),
            None => FormOutcome::Invalid("No user selected".to_string()),
        }
    });

    rsx! {
        div {
            class: "profile-page",
            div {
                class: "profile-header",
                button {
                    class: "back-btn",
                    onclick: move |_| AppNavigator.switch_page("search"),
                    "\u{2190} Back to search"
                }
                h1 {
                    if let Some(id) = selected { "Profile {id}" } else { "Profile" }
                }
            }
            {match profile.read().clone() {
                None => rsx! { p { class: "form-note", "Loading profile..." } },
                Some(outcome) => rsx! { OutcomeView { note: None, outcome: Some(outcome) } },
            }}
        }
    }
}
