//! Event repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Event};

/// Repository for event lookups
pub struct EventRepository;

impl EventRepository {
    /// Find event by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(event)
    }

    /// Lock the event row for the rest of the transaction.
    ///
    /// Returns `false` when the event does not exist.
    pub async fn lock_for_update(conn: &mut PgConnection, id: &Uuid) -> AppResult<bool> {
        let locked: Option<Uuid> =
            sqlx::query_scalar(r#"SELECT id FROM events WHERE id = $1 FOR UPDATE"#)
                .bind(id)
                .fetch_optional(conn)
                .await?;

        Ok(locked.is_some())
    }
}
