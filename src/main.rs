use fashionfot_lib::bootstrap::{self, config::resolve_config_path};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();

    let config_path = resolve_config_path(std::env::var("FASHIONFOT_CONFIG").ok());
    let config = if config_path.exists() {
        bootstrap::load_config(config_path)?
    } else {
        eprintln!(
            "Config file {} not found, running with empty configuration",
            config_path.display()
        );
        ff_core::AppConfig::empty()
    };

    bootstrap::init_tracing_subscriber(&config)?;
    bootstrap::run_app(config).await
}
