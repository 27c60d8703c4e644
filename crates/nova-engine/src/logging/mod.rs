//! Logging utilities.
//!
//! Centralizes logger initialization, the optional dated log file, and the
//! sink behind `EngineApi::log`. Everything goes through the standard `log`
//! facade.

mod file;
mod game;
mod init;

pub use file::{date_stamp, log_file_path, open_log_file};
pub use game::{join_args, log_args, GAME_TARGET};
pub use init::{init_logging, LoggingConfig};
