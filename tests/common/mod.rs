use std::sync::Arc;
use superheroes::db::database_service::DatabaseService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh in-memory database, migrated but empty.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DatabaseService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }

    /// Fresh in-memory database loaded with the fixture dataset.
    pub async fn seeded() -> TestContext {
        let ctx = Self::new().await;
        ctx.db.seed().await.expect("Failed to seed database");
        ctx
    }

    #[allow(dead_code)]
    pub async fn hero_id(&self, name: &str) -> i32 {
        self.db.list_heroes().await.expect("Failed to list heroes")
            .into_iter()
            .find(|h| h.name == name)
            .unwrap_or_else(|| panic!("No seeded hero named {name}"))
            .id
    }

    #[allow(dead_code)]
    pub async fn power_id(&self, name: &str) -> i32 {
        self.db.list_powers().await.expect("Failed to list powers")
            .into_iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("No seeded power named {name}"))
            .id
    }
}

/// An id no fixture row will ever get.
#[allow(dead_code)]
pub const MISSING_ID: i32 = 99_999;
