use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use weather_extract::config::AppSettings;
use weather_extract::facade::ExtractionFacade;
use weather_extract::factory::StrategyRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🌦️ Weather Extract - historical station archives");
    info!("==========================================");

    let settings = AppSettings::new().context("Failed to load settings")?;
    let registry = StrategyRegistry::builtin();

    let mut sources: Vec<_> = registry.sites().collect();
    sources.sort_unstable();
    info!("Registered sources: {}", sources.join(", "));

    let facade = ExtractionFacade::new(settings, registry);
    facade.run().await?;

    Ok(())
}
