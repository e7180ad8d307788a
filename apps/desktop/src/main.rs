//! UserSearch Desktop — Dioxus front end for the user search page.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod profile;
mod search;
mod state;

use app::App;
use usersearch_core::PanelConfig;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_CONFIG: Mutex<Option<PanelConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("usersearch=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let root = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = usersearch_core::load_config(&root);
    tracing::info!(api_url = config.api_url.as_str(), "starting");
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Users")
                            .with_inner_size(LogicalSize::new(1200.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(700.0, 500.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
