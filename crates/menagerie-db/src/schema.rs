//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as strings. Enums are stored as strings with
//! ASSERT constraints for validation.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Zones (top-level park areas; authored by the seed import)
-- =======================================================================
DEFINE TABLE zone SCHEMAFULL;
DEFINE FIELD name ON TABLE zone TYPE string;
DEFINE FIELD color ON TABLE zone TYPE string;
DEFINE FIELD created_at ON TABLE zone TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE zone TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Enclosures (zone scope)
-- =======================================================================
DEFINE TABLE enclosure SCHEMAFULL;
DEFINE FIELD zone_id ON TABLE enclosure TYPE string;
DEFINE FIELD biome_id ON TABLE enclosure TYPE string;
DEFINE FIELD meal ON TABLE enclosure TYPE string;
DEFINE FIELD state ON TABLE enclosure TYPE string \
    ASSERT $value IN ['Open', 'Closed'] DEFAULT 'Open';
DEFINE FIELD average_rating ON TABLE enclosure TYPE float DEFAULT 0.0;
DEFINE FIELD created_at ON TABLE enclosure TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE enclosure TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_enclosure_zone ON TABLE enclosure COLUMNS zone_id;

-- =======================================================================
-- Animals (enclosure scope)
-- =======================================================================
DEFINE TABLE animal SCHEMAFULL;
DEFINE FIELD zone_id ON TABLE animal TYPE string;
DEFINE FIELD enclosure_id ON TABLE animal TYPE string;
DEFINE FIELD name ON TABLE animal TYPE string;
DEFINE FIELD external_id ON TABLE animal TYPE string;
DEFINE FIELD created_at ON TABLE animal TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_animal_enclosure ON TABLE animal \
    COLUMNS zone_id, enclosure_id;

-- =======================================================================
-- Ratings
-- =======================================================================
-- The (user_id, zone_id, enclosure_id) index is deliberately NOT
-- unique: the at-most-one-rating-per-triple invariant is enforced by
-- the rating service's query-then-write flow, matching the original
-- system's behavior.
DEFINE TABLE rating SCHEMAFULL;
DEFINE FIELD user_id ON TABLE rating TYPE string;
DEFINE FIELD zone_id ON TABLE rating TYPE string;
DEFINE FIELD enclosure_id ON TABLE rating TYPE string;
DEFINE FIELD value ON TABLE rating TYPE float;
DEFINE FIELD timestamp ON TABLE rating TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_rating_user_enclosure ON TABLE rating \
    COLUMNS user_id, zone_id, enclosure_id;
DEFINE INDEX idx_rating_enclosure ON TABLE rating \
    COLUMNS zone_id, enclosure_id;

-- =======================================================================
-- Users
-- =======================================================================
DEFINE TABLE user SCHEMAFULL;
DEFINE FIELD email ON TABLE user TYPE string;
DEFINE FIELD last_name ON TABLE user TYPE string;
DEFINE FIELD first_name ON TABLE user TYPE string;
DEFINE FIELD age ON TABLE user TYPE int;
DEFINE FIELD role ON TABLE user TYPE string \
    ASSERT $value IN ['Visitor', 'Admin'] DEFAULT 'Visitor';
DEFINE FIELD password_hash ON TABLE user TYPE string;
DEFINE FIELD created_at ON TABLE user TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE user TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_user_email ON TABLE user COLUMNS email UNIQUE;

-- =======================================================================
-- Sessions
-- =======================================================================
DEFINE TABLE session SCHEMAFULL;
DEFINE FIELD user_id ON TABLE session TYPE string;
DEFINE FIELD token_hash ON TABLE session TYPE string;
DEFINE FIELD expires_at ON TABLE session TYPE datetime;
DEFINE FIELD created_at ON TABLE session TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_session_token ON TABLE session \
    COLUMNS token_hash UNIQUE;
DEFINE INDEX idx_session_user ON TABLE session COLUMNS user_id;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
/// All DEFINE statements are idempotent so re-running is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(version = migration.version, "migration applied");
        }
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
///
/// Exposed for testing with in-memory SurrealDB instances that
/// bypass the migration runner.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
