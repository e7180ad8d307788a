//! Rendering of a form's outcome: message banner plus result table.

use dioxus::prelude::*;
use usersearch_core::table::cell_text;
use usersearch_core::{FormOutcome, ResultSet};

#[component]
pub fn OutcomeView(
    #[props(!optional)] note: Option<String>,
    #[props(!optional)] outcome: Option<FormOutcome>,
) -> Element {
    rsx! {
        if let Some(note) = note {
            p { class: "form-note", "{note}" }
        }
        {match outcome {
            None => rsx! {},
            Some(FormOutcome::Invalid(msg)) | Some(FormOutcome::Failed(msg)) => rsx! {
                div { class: "banner banner-error", "{msg}" }
            },
            Some(FormOutcome::Empty(msg)) => rsx! {
                div { class: "banner banner-warning", "{msg}" }
            },
            Some(FormOutcome::Found { message, results }) => rsx! {
                div { class: "banner banner-success", "{message}" }
                ResultsTable { results }
            },
            Some(FormOutcome::Opened { user_id, .. }) => rsx! {
                div { class: "banner banner-success", "Opening profile for UserID {user_id}" }
            },
        }}
    }
}

#[component]
pub fn ResultsTable(results: ResultSet) -> Element {
    rsx! {
        div {
            class: "results-scroll",
            table {
                class: "results-table",
                thead {
                    tr {
                        for column in results.columns.iter() {
                            th { key: "{column.label}", "{column.label}" }
                        }
                    }
                }
                tbody {
                    for (i, row) in results.rows.iter().enumerate() {
                        tr {
                            key: "{i}",
                            for value in row.iter() {
                                td { {cell_text(value)} }
                            }
                        }
                    }
                }
            }
            div { class: "results-count", "{results.len()} rows" }
        }
    }
}
