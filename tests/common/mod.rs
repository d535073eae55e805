//! Shared fixtures for the integration tests.
//!
//! `MemoryCheckinStore` mirrors the transactional behaviour of the PostgreSQL
//! store: a replace either installs the whole new set or leaves the old one in
//! place. It adds hooks for injecting storage failures.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tokio::sync::RwLock;
use uuid::Uuid;

use eventdesk::{
    config::{Config, DatabaseConfig, JwtConfig, ServerConfig},
    db::CheckinStore,
    error::{AppError, AppResult},
    models::{CheckinRule, Event, NewCheckinRule},
    services::auth_service::Claims,
};

pub const JWT_SECRET: &str = "test_secret_key_for_testing_only";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            request_timeout_seconds: 5,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
        },
    }
}

/// `Authorization` header value carrying a freshly signed token
pub fn bearer() -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "organizer".to_string(),
        role: "admin".to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}

#[derive(Default)]
struct MemoryState {
    events: HashMap<Uuid, Event>,
    rules: HashMap<Uuid, Vec<CheckinRule>>,
    fail_next_replace: bool,
    replace_count: usize,
}

/// Check-in store holding everything in process memory
#[derive(Default)]
pub struct MemoryCheckinStore {
    state: RwLock<MemoryState>,
}

impl MemoryCheckinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event scheduled at `date_time`
    pub async fn add_event(&self, name: &str, date_time: DateTime<Utc>) -> Event {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            date_time,
            location: None,
            status: "ACTIVE".to_string(),
            created_at: now,
            updated_at: now,
        };

        self.state
            .write()
            .await
            .events
            .insert(event.id, event.clone());
        event
    }

    /// Make the next replace fail with a storage error
    pub async fn fail_next_replace(&self) {
        self.state.write().await.fail_next_replace = true;
    }

    /// Number of replaces that committed
    pub async fn replace_count(&self) -> usize {
        self.state.read().await.replace_count
    }
}

#[async_trait]
impl CheckinStore for MemoryCheckinStore {
    async fn find_event(&self, event_id: Uuid) -> AppResult<Option<Event>> {
        Ok(self.state.read().await.events.get(&event_id).cloned())
    }

    async fn list_rules(&self, event_id: Uuid) -> AppResult<Vec<CheckinRule>> {
        Ok(self
            .state
            .read()
            .await
            .rules
            .get(&event_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_rules(
        &self,
        event_id: Uuid,
        rules: Vec<NewCheckinRule>,
    ) -> AppResult<Vec<CheckinRule>> {
        // The write guard plays the role of the event row lock.
        let mut state = self.state.write().await;

        if !state.events.contains_key(&event_id) {
            return Err(AppError::EventNotFound(event_id));
        }

        if std::mem::take(&mut state.fail_next_replace) {
            return Err(AppError::Database(
                "simulated failure while replacing check-in rules".to_string(),
            ));
        }

        let mut working: Vec<CheckinRule> = Vec::with_capacity(rules.len());

        let now = Utc::now();
        for rule in rules {
            let id = rule.id.unwrap_or_else(Uuid::new_v4);

            let taken_elsewhere = state
                .rules
                .iter()
                .filter(|(owner, _)| **owner != event_id)
                .any(|(_, stored)| stored.iter().any(|r| r.id == id));
            if taken_elsewhere || working.iter().any(|r| r.id == id) {
                return Err(AppError::Database(format!(
                    "duplicate key value violates unique constraint: checkin_rules.id = {}",
                    id
                )));
            }

            working.push(CheckinRule {
                id,
                event_id,
                name: rule.name.trim().to_string(),
                active: rule.active,
                requirement: rule.requirement,
                release_minutes_before: rule.release_minutes_before,
                close_minutes_after: rule.close_minutes_after,
                created_at: now,
                updated_at: now,
            });
        }

        state.rules.insert(event_id, working.clone());
        state.replace_count += 1;

        Ok(working)
    }
}

