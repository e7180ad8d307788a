//! "View profile" form — checks the user exists, then opens the profile page.

use dioxus::prelude::*;
use usersearch_core::session::RecordingNavigator;
use usersearch_core::{FormOutcome, Navigator, SessionState};

use super::lookup_forms::parse_user_id;
use super::{use_form_state, OutcomeView};
use crate::state::{with_panel, AppNavigator, SESSION};

#[component]
pub fn ViewProfileForm() -> Element {
    let mut user_id = use_signal(String::new);
    let mut state = use_form_state();

    rsx! {
        div {
            class: "search-form",
            label { class: "field-label", "UserID" }
            input {
                class: "field-input",
                r#type: "number",
                min: "0",
                step: "1",
                value: "{user_id}",
                oninput: move |e: Event<FormData>| user_id.set(e.value()),
            }
            button {
                class: "submit-btn",
                disabled: *state.busy.read(),
                onclick: move |_| {
                    if *state.busy.read() {
                        return;
                    }
                    let id = parse_user_id(&user_id.read());
                    state.outcome.set(None);
                    state.busy.set(true);

                    spawn(async move {
                        // Session writes and navigation happen here on the UI
                        // side, from what the worker recorded.
                        let result = with_panel(move |panel| {
                            let mut session = SessionState::new();
                            let mut nav = RecordingNavigator::default();
                            let outcome = panel.view_profile(id, &mut session, &mut nav);
                            (outcome, session, nav)
                        })
                        .await;

                        state.busy.set(false);
                        match result {
                            Ok((outcome, session, nav)) => {
                                if let Some(selected) = session.selected_user_id() {
                                    SESSION.write().select_user(selected);
                                }
                                state.outcome.set(Some(outcome));
                                for page in &nav.pages {
                                    AppNavigator.switch_page(page);
                                }
                            }
                            Err(msg) => state.outcome.set(Some(FormOutcome::Failed(msg))),
                        }
                    });
                },
                "Search for User"
            }
            OutcomeView { note: None, outcome: state.outcome.read().clone() }
        }
    }
}
