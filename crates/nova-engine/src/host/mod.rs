//! Host-side implementation of the engine API.
//!
//! Script calls are recorded on a shared [`HostHandle`]; the runtime
//! applies buffered commands after the current poll of the load task.

mod handle;

pub use handle::{Command, HostHandle, HostWindow};
