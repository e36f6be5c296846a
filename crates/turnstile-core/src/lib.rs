//! Core library for turnstile: configuration, session persistence, the typed
//! API client, and the pure pieces of the view model (filtering, form
//! validation, cross-view notices).

pub mod api;
pub mod bus;
pub mod config;
pub mod filter;
pub mod forms;
pub mod logging;
pub mod models;
pub mod session;
