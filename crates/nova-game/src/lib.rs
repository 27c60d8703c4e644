//! Nova test game.
//!
//! The whole game is its load-time callback: configure the engine, reveal
//! the window, start the run loop.

use anyhow::Result;

use nova_engine::api::{Configure, EngineApi, WindowApi};
use nova_engine::config::{EngineConfig, WindowConfig};

/// Configuration record handed to the engine at load time.
pub fn game_config() -> EngineConfig {
    EngineConfig::new("Nova Test Game").with_window(WindowConfig {
        min_width: Some(640),
        min_height: Some(480),
        resizable: Some(true),
        maximized: Some(true),
        hidden: Some(true),
        ..WindowConfig::default()
    })
}

/// Load-time callback registered with the engine.
pub async fn on_load<E: EngineApi>(engine: E, configure: Configure) -> Result<()> {
    engine.log(&[&"Configuring engine..."]);

    configure.call(game_config()).await?;

    engine.log(&[&"Engine configured!"]);

    engine.window().show();

    engine.start();

    Ok(())
}
