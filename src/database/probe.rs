use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::DatabaseSettings;

/// Soft dependency on the data store. The store being absent is a normal
/// state of the system, not an error, so it gets its own variant instead of
/// being modeled as a failed connection.
#[derive(Clone)]
pub enum DataStore {
    NotConfigured,
    Unavailable(String),
    Connected(PgPool),
}

/// Outcome of probing the data store, rendered entirely as display strings.
/// Probing never fails; trouble is described, not propagated.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub status: String,
    pub connected: bool,
    pub collections: Vec<String>,
}

impl DataStore {
    /// Build the capability from settings. A missing URL yields
    /// `NotConfigured`; a URL that cannot be connected to yields
    /// `Unavailable` with the reason. Neither stops the process.
    pub async fn connect(settings: &DatabaseSettings) -> Self {
        let url = match &settings.url {
            Some(url) => url,
            None => {
                info!("No DATABASE_URL set, running without a data store");
                return DataStore::NotConfigured;
            }
        };

        match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await
        {
            Ok(pool) => {
                info!("Data store connection established");
                DataStore::Connected(pool)
            }
            Err(e) => {
                warn!("Data store unreachable, continuing without it: {}", e);
                DataStore::Unavailable(e.to_string())
            }
        }
    }

    /// Check reachability and list up to ten tables. Every failure mode is
    /// folded into the report's status string.
    pub async fn probe(&self) -> ProbeReport {
        match self {
            DataStore::NotConfigured => ProbeReport {
                status: "❌ Not Available".to_string(),
                connected: false,
                collections: Vec::new(),
            },
            DataStore::Unavailable(reason) => ProbeReport {
                status: format!("❌ Error: {}", truncate(reason, 50)),
                connected: false,
                collections: Vec::new(),
            },
            DataStore::Connected(pool) => match list_tables(pool).await {
                Ok(tables) => ProbeReport {
                    status: "✅ Connected & Working".to_string(),
                    connected: true,
                    collections: tables,
                },
                Err(e) => ProbeReport {
                    status: format!("⚠️  Connected but Error: {}", truncate(&e.to_string(), 50)),
                    connected: true,
                    collections: Vec::new(),
                },
            },
        }
    }
}

async fn list_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT table_name FROM information_schema.tables \
         WHERE table_schema = 'public' ORDER BY table_name LIMIT 10",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(|row| row.get("table_name")).collect())
}

fn truncate(msg: &str, limit: usize) -> &str {
    match msg.char_indices().nth(limit) {
        Some((idx, _)) => &msg[..idx],
        None => msg,
    }
}
