//! Script-facing engine API.
//!
//! This is the stable contract between a game's load-time callback and the
//! host runtime. Games are written against [`EngineApi`] so they can be
//! driven by the real runtime or by a test double.

mod configure;
mod load;

use std::fmt::Display;

pub use configure::{
    configure_channel, Configure, ConfigureError, ConfigureRequest, PendingConfigure,
};
pub use load::{boxed_callback, LoadCallback, LoadStep, LoadTask};

/// Engine capabilities available to a game.
pub trait EngineApi {
    type Window: WindowApi;

    /// Variadic diagnostic sink. Fire-and-forget.
    fn log(&self, args: &[&dyn Display]);

    /// The host-owned game window.
    fn window(&self) -> &Self::Window;

    /// Begins the engine run loop.
    ///
    /// Returns `true` if the engine transitioned to running, `false` if it
    /// was already running or has not been configured.
    fn start(&self) -> bool;
}

/// Handle to the host-owned game window.
pub trait WindowApi {
    /// Makes the window visible.
    fn show(&self);
}
