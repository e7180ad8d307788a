//! Search page — the five independent search forms.

mod lookup_forms;
mod outcome;
mod view_form;

use dioxus::prelude::*;
use usersearch_core::{FormOutcome, SearchCriteria, Submission};

use crate::state::with_panel;
use lookup_forms::{ByIdForm, IndustryForm, SkillsForm, YearForm};
pub use outcome::OutcomeView;
use view_form::ViewProfileForm;

/// Search page: each form keeps its own outcome, so submitting one never
/// clears another.
#[component]
pub fn SearchPage() -> Element {
    rsx! {
        div {
            class: "search-page",
            h1 { "Users" }

            p { class: "form-caption", "Search by users" }
            ByIdForm {}

            p { class: "form-caption", "Search by Industry" }
            IndustryForm {}

            p { class: "form-caption", "Search by Skills (Employers)" }
            SkillsForm {}

            ViewProfileForm {}

            p { class: "form-caption", "If you want to find an older student to talk to: Search by Student Year" }
            YearForm {}
        }
    }
}

/// Per-form state: last outcome, in-flight flag, and progress note.
#[derive(Clone, Copy)]
pub struct FormState {
    pub outcome: Signal<Option<FormOutcome>>,
    pub busy: Signal<bool>,
    pub note: Signal<Option<String>>,
}

pub fn use_form_state() -> FormState {
    FormState {
        outcome: use_signal(|| None),
        busy: use_signal(|| false),
        note: use_signal(|| None),
    }
}

impl FormState {
    /// Validate, then run the lookup on a worker. Invalid input never
    /// reaches the network. Ignored while a call is in flight.
    pub fn submit_lookup(mut self, criteria: SearchCriteria) {
        if *self.busy.read() {
            return;
        }
        let lookup = match criteria.validate() {
            Ok(Submission::Lookup(lookup)) => lookup,
            Ok(Submission::ViewProfile { .. }) => return,
            Err(e) => {
                self.note.set(None);
                self.outcome.set(Some(FormOutcome::Invalid(e.to_string())));
                return;
            }
        };

        self.note.set(lookup.progress_note());
        self.outcome.set(None);
        self.busy.set(true);

        spawn(async move {
            let result = with_panel(move |panel| panel.run_lookup(&lookup)).await;
            self.outcome.set(Some(result.unwrap_or_else(FormOutcome::Failed)));
            self.busy.set(false);
        });
    }
}
