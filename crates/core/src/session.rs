//! Cross-page session state and page navigation.

/// Application-scoped state shared between the search page and the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    selected_user_id: Option<i64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_user(&mut self, user_id: i64) {
        self.selected_user_id = Some(user_id);
    }

    pub fn selected_user_id(&self) -> Option<i64> {
        self.selected_user_id
    }
}

/// Switches the application to another named page.
pub trait Navigator {
    fn switch_page(&mut self, page: &str);
}

/// Navigator that only remembers which pages were requested.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub pages: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn switch_page(&mut self, page: &str) {
        self.pages.push(page.to_string());
    }
}
