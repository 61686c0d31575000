use admin_store::{config::Config, error::AppError, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database");
    let _db = startup::connect_to_database(&config).await?;

    tracing::info!("Admin store schema is ready");

    Ok(())
}
