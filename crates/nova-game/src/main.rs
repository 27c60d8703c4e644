use nova_engine::logging::LoggingConfig;
use nova_engine::Engine;

fn main() -> anyhow::Result<()> {
    let logging = LoggingConfig {
        log_dir: LoggingConfig::beside_executable(),
        ..LoggingConfig::default()
    };

    Engine::new()
        .logging(logging)
        .on_load(|engine, configure| nova_game::on_load(engine, configure))
        .run()
}
