//! Full-screen TUI for turnstile.
//!
//! Elm-shaped: `state` holds the application state, `update` is the pure
//! reducer, `render` the pure view, and `runtime` owns the terminal and
//! executes effects.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod route;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::Runtime;
use turnstile_core::api::ApiClient;
use turnstile_core::session::SessionStore;

/// Runs the interactive client against the given API base URL until the
/// user quits.
pub async fn run(base_url: &str) -> Result<()> {
    // The TUI needs a real terminal to render into.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `turnstile events` for non-interactive listing."
        );
    }

    let api = ApiClient::new(base_url);
    tracing::info!(base_url = api.base_url(), "starting interactive client");

    let mut runtime = Runtime::new(api, SessionStore::new())?;
    runtime.run()
}
