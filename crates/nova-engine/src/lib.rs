//! Nova engine crate.
//!
//! Provides the script-facing engine API, the configuration records a game
//! hands to the host, and the winit-backed host runtime that applies them.

pub mod api;
pub mod config;
pub mod host;
pub mod logging;
pub mod window;

mod engine;

pub use engine::Engine;
