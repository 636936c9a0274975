use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use superheroes::config::EnvConfig;
use superheroes::db::database_service::DatabaseService;
use superheroes::routes::configure_routes;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?,
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
