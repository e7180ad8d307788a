//! Test harness for panel integration tests.
//!
//! Builds a `SearchPanel` over a scripted transport that records every request
//! instead of touching the network.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;
use usersearch_core::session::RecordingNavigator;
use usersearch_core::{ApiError, FormOutcome, ResultSet, SearchPanel, SessionState, Transport};

/// One request the panel made.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted reply for the next request.
pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
    Decode(&'static str),
}

#[derive(Default)]
pub struct FakeApi {
    replies: RefCell<VecDeque<Reply>>,
    pub calls: RefCell<Vec<Call>>,
}

impl Transport for FakeApi {
    fn get_json(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call { path: path.to_string(), body: body.cloned() });
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Json(v)) => Ok(v),
            Some(Reply::Status(status, message)) => {
                Err(ApiError::Server { status, message: message.to_string() })
            }
            Some(Reply::Decode(msg)) => Err(ApiError::Decode(msg.to_string())),
            None => panic!("unexpected request to {path}"),
        }
    }
}

pub struct TestHarness {
    pub panel: SearchPanel<FakeApi>,
    pub session: SessionState,
    pub nav: RecordingNavigator,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            panel: SearchPanel::new(FakeApi::default(), "view_profile"),
            session: SessionState::new(),
            nav: RecordingNavigator::default(),
        }
    }

    /// Queue a reply for the next request.
    pub fn reply(&self, reply: Reply) -> &Self {
        self.panel.transport().replies.borrow_mut().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.panel.transport().calls.borrow().clone()
    }

    pub fn view_profile(&mut self, user_id: i64) -> FormOutcome {
        self.panel.view_profile(user_id, &mut self.session, &mut self.nav)
    }
}

/// Table rows of a `Found` outcome.
pub fn table_of(out: &FormOutcome) -> Option<&ResultSet> {
    match out {
        FormOutcome::Found { results, .. } => Some(results),
        _ => None,
    }
}
