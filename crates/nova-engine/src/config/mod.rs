//! Engine configuration records.
//!
//! `EngineConfig` is what a game hands to `Configure::call`. The host
//! resolves its optional window block into concrete `WindowSettings`.

mod engine;
mod window;

pub use engine::{EngineConfig, WindowConfig};
pub use window::WindowSettings;
