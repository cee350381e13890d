use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderLedger;
use crate::payments::PaymentProcessor;
use crate::printing::PrintJobDispatcher;
use crate::utils::AppError;

/// Server state: configuration plus the shared connection pool.
///
/// Cloned into every handler; the pool is internally reference-counted so
/// clones are cheap. Services are constructed per request from the pool,
/// the same way repositories are.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub db: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, db: SqlitePool) -> Self {
        Self { config, db }
    }

    /// Initialize state: open the database, run migrations, seed the menu
    /// catalog if empty.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.database_path).await?;
        let pool = db_service.pool;

        crate::db::seed::seed_menu_if_empty(&pool)
            .await
            .map_err(AppError::from)?;

        Ok(Self::new(config.clone(), pool))
    }

    /// Order ledger bound to this state's pool and tax rate.
    pub fn ledger(&self) -> OrderLedger {
        OrderLedger::new(self.db.clone(), self.config.tax_rate)
    }

    /// Payment processor bound to this state's pool and tax rate.
    pub fn payments(&self) -> PaymentProcessor {
        PaymentProcessor::new(self.db.clone(), self.config.tax_rate)
    }

    /// Print dispatcher bound to this state's pool.
    pub fn dispatcher(&self) -> PrintJobDispatcher {
        PrintJobDispatcher::new(self.db.clone())
    }
}
