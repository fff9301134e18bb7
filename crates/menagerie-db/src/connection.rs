//! SurrealDB connection management.

use std::env;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

/// Configuration for connecting to SurrealDB.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`).
    pub url: String,
    /// SurrealDB namespace.
    pub namespace: String,
    /// SurrealDB database name.
    pub database: String,
    /// Root username for authentication.
    pub username: String,
    /// Root password for authentication.
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "menagerie".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// Build a configuration from `MENAGERIE_DB_*` environment
    /// variables, falling back to the defaults for unset values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("MENAGERIE_DB_URL").unwrap_or(defaults.url),
            namespace: env::var("MENAGERIE_DB_NAMESPACE").unwrap_or(defaults.namespace),
            database: env::var("MENAGERIE_DB_DATABASE").unwrap_or(defaults.database),
            username: env::var("MENAGERIE_DB_USERNAME").unwrap_or(defaults.username),
            password: env::var("MENAGERIE_DB_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// Manages a connection to SurrealDB.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Connect to SurrealDB using the provided configuration.
    ///
    /// Authenticates as root, selects the configured namespace and
    /// database, and returns a ready-to-use manager.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;
        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;
        db.use_ns(&config.namespace).use_db(&config.database).await?;

        Ok(Self { db })
    }

    /// The underlying client handle. Cheap to clone.
    pub fn db(&self) -> Surreal<Client> {
        self.db.clone()
    }
}
