use std::path::PathBuf;
use std::sync::Once;

use super::file::{open_log_file, TeeWriter};

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "nova_engine=debug,game=info,winit=warn").
///
/// When `log_dir` is set, records are also written to a dated file
/// `<log_dir>/<file_stem>-YYYY-MM-DD[-N].log`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub log_dir: Option<PathBuf>,
    pub file_stem: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            log_dir: None,
            file_stem: "nova".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Log directory next to the running executable (`<exe dir>/logs`).
    pub fn beside_executable() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join("logs"))
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. `Engine::run` calls this before the
/// runtime starts, so games only need it to log before that point.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        let file = config
            .log_dir
            .map(|dir| open_log_file(&dir, &config.file_stem));
        let mut file_error = None;
        match file {
            Some(Ok((_, f))) => {
                builder.target(env_logger::Target::Pipe(Box::new(TeeWriter::new(f))));
            }
            Some(Err(err)) => file_error = Some(err),
            None => {}
        }

        // Another logger may already be installed (tests, embedding hosts).
        if builder.try_init().is_err() {
            return;
        }

        if let Some(err) = file_error {
            log::warn!("file logging disabled: {err:#}");
        }
        log::debug!("logging initialized");
    });
}
