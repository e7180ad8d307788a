//! The four table-producing search forms.

use dioxus::prelude::*;
use usersearch_core::SearchCriteria;

use super::{use_form_state, OutcomeView};

/// Parse a number field; anything unparsable counts as zero (missing).
pub fn parse_user_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn ByIdForm() -> Element {
    let mut user_id = use_signal(String::new);
    let state = use_form_state();

    rsx! {
        div {
            class: "search-form",
            label { class: "field-label", "UserID" }
            input {
                class: "field-input",
                r#type: "number",
                step: "1",
                value: "{user_id}",
                oninput: move |e: Event<FormData>| user_id.set(e.value()),
            }
            button {
                class: "submit-btn",
                disabled: *state.busy.read(),
                onclick: move |_| {
                    let user_id = parse_user_id(&user_id.read());
                    state.submit_lookup(SearchCriteria::ById { user_id });
                },
                "Search for User"
            }
            OutcomeView { note: state.note.read().clone(), outcome: state.outcome.read().clone() }
        }
    }
}

#[component]
pub fn IndustryForm() -> Element {
    let mut industry = use_signal(String::new);
    let state = use_form_state();

    rsx! {
        div {
            class: "search-form",
            label { class: "field-label", "Industry" }
            textarea {
                class: "field-input",
                value: "{industry}",
                oninput: move |e: Event<FormData>| industry.set(e.value()),
            }
            button {
                class: "submit-btn",
                disabled: *state.busy.read(),
                onclick: move |_| {
                    state.submit_lookup(SearchCriteria::ByIndustry { industry: industry.read().clone() });
                },
                "Search for User"
            }
            OutcomeView { note: state.note.read().clone(), outcome: state.outcome.read().clone() }
        }
    }
}

#[component]
pub fn SkillsForm() -> Element {
    let mut soft_skills = use_signal(String::new);
    let mut tech_skills = use_signal(String::new);
    let state = use_form_state();

    rsx! {
        div {
            class: "search-form",
            label { class: "field-label", "Soft Skills" }
            textarea {
                class: "field-input",
                value: "{soft_skills}",
                oninput: move |e: Event<FormData>| soft_skills.set(e.value()),
            }
            label { class: "field-label", "Technical Skills" }
            textarea {
                class: "field-input",
                value: "{tech_skills}",
                oninput: move |e: Event<FormData>| tech_skills.set(e.value()),
            }
            button {
                class: "submit-btn",
                disabled: *state.busy.read(),
                onclick: move |_| {
                    state.submit_lookup(SearchCriteria::BySkills {
                        soft_skills: soft_skills.read().clone(),
                        tech_skills: tech_skills.read().clone(),
                    });
                },
                "Search for User"
            }
            OutcomeView { note: state.note.read().clone(), outcome: state.outcome.read().clone() }
        }
    }
}

#[component]
pub fn YearForm() -> Element {
    let mut year = use_signal(String::new);
    let state = use_form_state();

    rsx! {
        div {
            class: "search-form",
            label { class: "field-label", "Enter Year to Search for Students:" }
            input {
                class: "field-input",
                r#type: "text",
                value: "{year}",
                oninput: move |e: Event<FormData>| year.set(e.value()),
            }
            button {
                class: "submit-btn",
                disabled: *state.busy.read(),
                onclick: move |_| {
                    state.submit_lookup(SearchCriteria::ByYear { year: year.read().clone() });
                },
                "Search for Users"
            }
            OutcomeView { note: state.note.read().clone(), outcome: state.outcome.read().clone() }
        }
    }
}
