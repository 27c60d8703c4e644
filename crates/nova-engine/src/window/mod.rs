//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the game window, and runs the load-time
//! handshake against them.

mod runtime;

pub use runtime::{window_attributes, Runtime};
