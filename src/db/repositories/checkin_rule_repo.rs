//! Check-in rule repository

use sqlx::{PgConnection, PgExecutor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CheckinRule, NewCheckinRule},
};

/// Repository for check-in rule database operations
pub struct CheckinRuleRepository;

impl CheckinRuleRepository {
    /// List rules of an event in creation order
    pub async fn list_by_event<'e>(
        executor: impl PgExecutor<'e>,
        event_id: &Uuid,
    ) -> AppResult<Vec<CheckinRule>> {
        let rules = sqlx::query_as::<_, CheckinRule>(
            r#"
            SELECT id, event_id, name, active, requirement,
                   release_minutes_before, close_minutes_after,
                   created_at, updated_at
            FROM checkin_rules
            WHERE event_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(executor)
        .await?;

        Ok(rules)
    }

    /// Delete every rule of an event
    pub async fn delete_by_event(conn: &mut PgConnection, event_id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM checkin_rules WHERE event_id = $1"#)
            .bind(event_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Insert rules for an event in one statement, keeping supplied IDs.
    ///
    /// Rows are inserted in slice order, which fixes their `seq`.
    pub async fn insert_many(
        conn: &mut PgConnection,
        event_id: &Uuid,
        rules: &[NewCheckinRule],
    ) -> AppResult<u64> {
        if rules.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            r#"INSERT INTO checkin_rules (
                id, event_id, name, active, requirement,
                release_minutes_before, close_minutes_after
            ) "#,
        );

        builder.push_values(rules, |mut row, rule| {
            row.push("COALESCE(")
                .push_bind_unseparated(rule.id)
                .push_unseparated(", gen_random_uuid())")
                .push_bind(*event_id)
                .push_bind(rule.name.trim().to_string())
                .push_bind(rule.active)
                .push_bind(rule.requirement)
                .push_bind(rule.release_minutes_before)
                .push_bind(rule.close_minutes_after);
        });

        let result = builder.build().execute(conn).await?;

        Ok(result.rows_affected())
    }
}
