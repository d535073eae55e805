//! Database module
//!
//! This module handles database connections, migrations, repositories and
//! the check-in store implementations built on them.

pub mod connection;
pub mod pg_store;
pub mod repositories;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use pg_store::PgCheckinStore;
pub use store::CheckinStore;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
