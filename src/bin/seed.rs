use superheroes::config::EnvConfig;
use superheroes::db::database_service::DatabaseService;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();

    let db = DatabaseService::new(&config.db_url).await?;
    let summary = db.seed().await?;

    info!(
        "Database seeded: {} heroes, {} powers, {} hero_powers",
        summary.heroes, summary.powers, summary.hero_powers
    );
    Ok(())
}
