//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use tracing::warn;
use usersearch_core::{HttpTransport, Navigator, PanelConfig, SearchPanel, SessionState};

/// Which page the window shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Search,
    Profile,
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Panel configuration, set once at startup.
pub static CONFIG: GlobalSignal<PanelConfig> = Signal::global(PanelConfig::default);

/// Cross-page session; the profile page reads the selected user from here.
pub static SESSION: GlobalSignal<SessionState> = Signal::global(SessionState::new);

/// Page currently shown.
pub static PAGE: GlobalSignal<Page> = Signal::global(|| Page::Search);

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Navigator that maps page names onto [`Page`] and flips the `PAGE` signal.
pub struct AppNavigator;

impl Navigator for AppNavigator {
    fn switch_page(&mut self, page: &str) {
        let profile_page = CONFIG.read().profile_page.clone();
        if page == profile_page {
            *PAGE.write() = Page::Profile;
        } else if page == "search" {
            *PAGE.write() = Page::Search;
        } else {
            warn!(page, "unknown page");
        }
    }
}

// ---------------------------------------------------------------------------
// Running panel calls off the UI thread
// ---------------------------------------------------------------------------

/// Run a blocking panel call on a worker thread and return its result.
/// A worker panic comes back as the error text.
pub async fn with_panel<R, F>(f: F) -> Result<R, String>
where
    R: Send + 'static,
    F: FnOnce(&SearchPanel<HttpTransport>) -> R + Send + 'static,
{
    let config = CONFIG.read().clone();
    tokio::task::spawn_blocking(move || {
        let panel = SearchPanel::from_config(&config);
        f(&panel)
    })
    .await
    .map_err(|e| {
        warn!(error = %e, "search worker failed");
        format!("Failed to fetch data from the API: {e}")
    })
}
