use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr};
use tracing::{info, warn};

use crate::types::error::AppError;

/// Owns the connection pool. Built once in `main` (or per test) and handed to
/// the HTTP app through `web::Data`, never stored globally.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri.to_owned());
        // every pooled connection to sqlite::memory: would get its own empty database
        if uri.starts_with("sqlite") && uri.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }
        Self::connect(options).await
    }

    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Migrations finished.");
        Ok(Self { database_connection })
    }

    /// Rolls back a failed write and hands back the error that caused it.
    /// Storage failures become `Validation`; a failing rollback is only logged.
    pub(crate) async fn abort(txn: DatabaseTransaction, err: AppError) -> AppError {
        if let Err(e) = txn.rollback().await {
            warn!("Rollback failed: {}", e);
        }
        err.into_validation()
    }
}
