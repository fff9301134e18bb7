//! One-shot bulk import of the park structure from a local seed file.
//!
//! The seed file is a JSON array of zones, each containing enclosures,
//! each containing animals; field names mirror the administrative
//! export (`id_biomes`, `id_animal`). Records are written depth-first:
//! the zone document, then each enclosure, then each animal. For demo
//! purposes every enclosure gets a synthesized random open/closed
//! state and a random initial rating in 1.0–5.0 (one decimal). The RNG
//! is injected so tests can seed it.
//!
//! Not part of normal runtime; invoked manually via the server binary.

use std::path::Path;

use menagerie_core::error::ParkError;
use menagerie_core::models::animal::Animal;
use menagerie_core::models::enclosure::{Enclosure, EnclosureState};
use menagerie_core::models::rating::round_to_tenth;
use menagerie_core::models::zone::Zone;
use menagerie_core::repository::{AnimalRepository, EnclosureRepository, ZoneRepository};
use rand::Rng;
use serde::Deserialize;
use surrealdb::{Connection, Surreal};
use tracing::{error, info};

use crate::repository::{
    SurrealAnimalRepository, SurrealEnclosureRepository, SurrealZoneRepository,
};

/// Import-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("store write failed: {0}")]
    Store(#[from] ParkError),
}

// -----------------------------------------------------------------------
// Seed file shape
// -----------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneSeed {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub enclosures: Vec<EnclosureSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnclosureSeed {
    pub id: String,
    #[serde(rename = "id_biomes")]
    pub biome_id: String,
    pub meal: String,
    #[serde(default)]
    pub animals: Vec<AnimalSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimalSeed {
    pub id: String,
    pub name: String,
    #[serde(rename = "id_animal")]
    pub external_id: String,
}

/// Per-entity counts of a completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub zones: usize,
    pub enclosures: usize,
    pub animals: usize,
}

/// Parse a seed file from disk.
pub fn load_seed_file(path: &Path) -> Result<Vec<ZoneSeed>, ImportError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Import the full zone → enclosure → animal hierarchy.
///
/// Writes are depth-first and sequential. Any failure aborts the
/// import with a logged error; already-written records are left in
/// place (re-running the import upserts over them).
pub async fn import_zoo<C, R>(
    db: &Surreal<C>,
    zones: &[ZoneSeed],
    rng: &mut R,
) -> Result<ImportSummary, ImportError>
where
    C: Connection,
    R: Rng + Send,
{
    match import_all(db, zones, rng).await {
        Ok(summary) => {
            info!(
                zones = summary.zones,
                enclosures = summary.enclosures,
                animals = summary.animals,
                "seed import complete"
            );
            Ok(summary)
        }
        Err(e) => {
            error!(error = %e, "seed import aborted");
            Err(e)
        }
    }
}

async fn import_all<C, R>(
    db: &Surreal<C>,
    zones: &[ZoneSeed],
    rng: &mut R,
) -> Result<ImportSummary, ImportError>
where
    C: Connection,
    R: Rng + Send,
{
    let zone_repo = SurrealZoneRepository::new(db.clone());
    let enclosure_repo = SurrealEnclosureRepository::new(db.clone());
    let animal_repo = SurrealAnimalRepository::new(db.clone());

    let mut summary = ImportSummary {
        zones: 0,
        enclosures: 0,
        animals: 0,
    };

    for zone in zones {
        zone_repo
            .upsert(Zone {
                id: zone.id.clone(),
                name: zone.name.clone(),
                color: zone.color.clone(),
            })
            .await?;
        summary.zones += 1;

        for enclosure in &zone.enclosures {
            let state = if rng.random::<bool>() {
                EnclosureState::Open
            } else {
                EnclosureState::Closed
            };
            let initial_rating = round_to_tenth(rng.random::<f64>() * 4.0 + 1.0);

            enclosure_repo
                .upsert(Enclosure {
                    id: enclosure.id.clone(),
                    zone_id: zone.id.clone(),
                    biome_id: enclosure.biome_id.clone(),
                    meal: enclosure.meal.clone(),
                    state,
                    average_rating: initial_rating,
                })
                .await?;
            summary.enclosures += 1;

            for animal in &enclosure.animals {
                animal_repo
                    .upsert(Animal {
                        id: animal.id.clone(),
                        zone_id: zone.id.clone(),
                        enclosure_id: enclosure.id.clone(),
                        name: animal.name.clone(),
                        external_id: animal.external_id.clone(),
                    })
                    .await?;
                summary.animals += 1;
            }
        }
    }

    Ok(summary)
}
