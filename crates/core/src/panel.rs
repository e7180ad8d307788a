//! The search panel: validate a form submission, make one API call, and turn
//! the response into the outcome the form displays.

use tracing::{debug, info, warn};

use crate::client::{HttpTransport, Transport};
use crate::error::ApiError;
use crate::session::{Navigator, SessionState};
use crate::types::*;
use crate::PanelConfig;

/// Runs the five search forms against a [`Transport`].
pub struct SearchPanel<T> {
    api: T,
    profile_page: String,
}

impl SearchPanel<HttpTransport> {
    pub fn from_config(config: &PanelConfig) -> Self {
        Self::new(HttpTransport::new(&config.api_url), &config.profile_page)
    }
}

impl<T: Transport> SearchPanel<T> {
    pub fn new(api: T, profile_page: impl Into<String>) -> Self {
        Self { api, profile_page: profile_page.into() }
    }

    pub fn transport(&self) -> &T {
        &self.api
    }

    pub fn lookup_by_id(&self, user_id: i64) -> FormOutcome {
        self.search(&SearchCriteria::ById { user_id })
    }

    pub fn lookup_by_industry(&self, industry: &str) -> FormOutcome {
        self.search(&SearchCriteria::ByIndustry { industry: industry.to_string() })
    }

    pub fn lookup_by_skills(&self, soft_skills: &str, tech_skills: &str) -> FormOutcome {
        self.search(&SearchCriteria::BySkills {
            soft_skills: soft_skills.to_string(),
            tech_skills: tech_skills.to_string(),
        })
    }

    pub fn lookup_by_year(&self, year: &str) -> FormOutcome {
        self.search(&SearchCriteria::ByYear { year: year.to_string() })
    }

    /// Run a table-producing search. `ViewProfile` criteria are rejected here
    /// because they need session state; use [`SearchPanel::submit`].
    pub fn search(&self, criteria: &SearchCriteria) -> FormOutcome {
        match criteria.validate() {
            Err(e) => FormOutcome::Invalid(e.to_string()),
            Ok(Submission::Lookup(lookup)) => self.run_lookup(&lookup),
            Ok(Submission::ViewProfile { user_id }) => {
                FormOutcome::Invalid(format!("Profile {user_id} must be opened through the view form"))
            }
        }
    }

    /// Run any of the five forms, including profile navigation.
    pub fn submit(
        &self,
        criteria: &SearchCriteria,
        session: &mut SessionState,
        nav: &mut dyn Navigator,
    ) -> FormOutcome {
        match criteria {
            SearchCriteria::ViewProfile { user_id } => self.view_profile(*user_id, session, nav),
            other => self.search(other),
        }
    }

    /// Execute a validated lookup: one request, project, classify.
    pub fn run_lookup(&self, lookup: &Lookup) -> FormOutcome {
        match self.fetch(lookup) {
            Ok(results) if results.is_empty() => {
                debug!(lookup = lookup.name(), "no rows");
                FormOutcome::Empty(lookup.empty_message().to_string())
            }
            Ok(results) => {
                debug!(lookup = lookup.name(), rows = results.len(), "rows fetched");
                FormOutcome::Found { message: SUCCESS_MESSAGE.to_string(), results }
            }
            Err(e) => {
                warn!(lookup = lookup.name(), error = %e, "lookup failed");
                FormOutcome::Failed(format!("Failed to fetch data from the API: {e}"))
            }
        }
    }

    /// Fetch and project without classifying the result.
    pub fn fetch(&self, lookup: &Lookup) -> Result<ResultSet, ApiError> {
        let body = lookup.body();
        let value = self.api.get_json(&lookup.path(), body.as_ref())?;
        let records = parse_records(value).map_err(ApiError::Decode)?;
        Ok(ResultSet::project(lookup.columns(), &records))
    }

    /// Confirm the user exists, publish the selection, and switch to the
    /// profile page. Nothing is written and no navigation happens on failure.
    pub fn view_profile(
        &self,
        user_id: i64,
        session: &mut SessionState,
        nav: &mut dyn Navigator,
    ) -> FormOutcome {
        if let Err(e) = (SearchCriteria::ViewProfile { user_id }).validate() {
            return FormOutcome::Invalid(e.to_string());
        }

        match self.fetch(&Lookup::ById { user_id }) {
            Ok(results) if results.is_empty() => {
                warn!(user_id, "profile not found");
                FormOutcome::Failed(format!(
                    "Failed to fetch user data from the API: no user with UserID {user_id}"
                ))
            }
            Ok(profile) => {
                session.select_user(user_id);
                info!(user_id, page = self.profile_page.as_str(), "opening profile");
                nav.switch_page(&self.profile_page);
                FormOutcome::Opened { user_id, profile }
            }
            Err(e) => {
                warn!(user_id, error = %e, "profile check failed");
                FormOutcome::Failed(format!("Failed to fetch user data from the API: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    struct Canned {
        reply: RefCell<Option<Result<Value, ApiError>>>,
    }

    impl Canned {
        fn ok(v: Value) -> Self {
            Self { reply: RefCell::new(Some(Ok(v))) }
        }
    }

    impl Transport for Canned {
        fn get_json(&self, _path: &str, _body: Option<&Value>) -> Result<Value, ApiError> {
            self.reply.borrow_mut().take().expect("transport called twice")
        }
    }

    #[test]
    fn test_search_rejects_view_profile_criteria() {
        let panel = SearchPanel::new(Canned::ok(json!([])), "view_profile");
        let out = panel.search(&SearchCriteria::ViewProfile { user_id: 3 });
        assert!(matches!(out, FormOutcome::Invalid(_)));
        assert!(panel.transport().reply.borrow().is_some(), "no call expected");
    }

    #[test]
    fn test_year_empty_uses_year_message() {
        let panel = SearchPanel::new(Canned::ok(json!([])), "view_profile");
        assert_eq!(
            panel.lookup_by_year("2027"),
            FormOutcome::Empty(NO_DATA_FOR_YEAR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_malformed_body_is_failure() {
        let panel = SearchPanel::new(Canned::ok(json!({ "error": "oops" })), "view_profile");
        match panel.lookup_by_industry("Finance") {
            FormOutcome::Failed(msg) => {
                assert!(msg.starts_with("Failed to fetch data from the API: decode:"), "{msg}")
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
