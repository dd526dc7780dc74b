//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::StoreConfig;
use crate::ledger::SalesLedger;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Carries the storage handles explicitly so
/// handlers never reach for ambient globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StoreConfig,
    pool: SqlitePool,
    ledger: SalesLedger,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StoreConfig, pool: SqlitePool) -> Self {
        let ledger = SalesLedger::new(&config.ledger_path);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                ledger,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a reference to the sales ledger.
    #[must_use]
    pub fn ledger(&self) -> &SalesLedger {
        &self.inner.ledger
    }
}
