use std::future::Future;

use anyhow::{Context, Result};

use crate::api::{boxed_callback, Configure, LoadCallback};
use crate::host::HostHandle;
use crate::logging::{init_logging, LoggingConfig};
use crate::window::Runtime;

/// Engine builder.
///
/// ```rust,ignore
/// Engine::new()
///     .on_load(|engine, configure| async move {
///         configure.call(EngineConfig::new("My Game")).await?;
///         engine.window().show();
///         engine.start();
///         Ok(())
///     })
///     .run()
/// ```
pub struct Engine {
    logging: LoggingConfig,
    load: Option<LoadCallback<HostHandle>>,
    replaced: bool,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            logging: LoggingConfig::default(),
            load: None,
            replaced: false,
        }
    }

    pub fn logging(mut self, config: LoggingConfig) -> Self {
        self.logging = config;
        self
    }

    /// Registers the load-time callback.
    ///
    /// The host calls it once, after the platform is ready, with an engine
    /// handle and a one-shot [`Configure`]. A later registration replaces an
    /// earlier one.
    pub fn on_load<F, Fut>(mut self, callback: F) -> Self
    where
        F: FnOnce(HostHandle, Configure) -> Fut + 'static,
        Fut: Future<Output = Result<()>> + 'static,
    {
        self.replaced |= self.load.is_some();
        self.load = Some(boxed_callback(callback));
        self
    }

    pub fn has_load_callback(&self) -> bool {
        self.load.is_some()
    }

    /// Initializes logging and hands control to the runtime. Returns once
    /// the run loop has exited.
    pub fn run(self) -> Result<()> {
        init_logging(self.logging);

        if self.replaced {
            log::warn!("load callback was registered more than once; using the last one");
        }

        let load = self
            .load
            .context("no load callback registered; call Engine::on_load before run")?;

        log::info!("initializing engine");
        let result = Runtime::run(load);
        log::info!("engine terminated");

        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
