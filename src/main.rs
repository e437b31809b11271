use anyhow::Context;
use medinova_backend::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,medinova_backend=debug")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    medinova_backend::run(config).await.context("server error")?;
    Ok(())
}
