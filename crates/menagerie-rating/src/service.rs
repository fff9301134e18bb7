//! Rating service: per-user submission with update-in-place, and the
//! derived enclosure average.

use tracing::warn;
use uuid::Uuid;

use menagerie_core::error::{ParkError, ParkResult};
use menagerie_core::models::rating::{CreateRating, round_to_tenth};
use menagerie_core::repository::{EnclosureRepository, RatingRepository};

pub struct RatingService<R, E>
where
    R: RatingRepository,
    E: EnclosureRepository,
{
    rating_repo: R,
    enclosure_repo: E,
}

impl<R, E> RatingService<R, E>
where
    R: RatingRepository,
    E: EnclosureRepository,
{
    pub fn new(rating_repo: R, enclosure_repo: E) -> Self {
        Self {
            rating_repo,
            enclosure_repo,
        }
    }

    /// Submit the caller's rating for one enclosure.
    ///
    /// At most one rating per `(user, zone, enclosure)` triple: an
    /// existing record is updated in place, otherwise a new one is
    /// created. Afterwards the enclosure average is recomputed from
    /// all stored ratings. The two writes are not atomic; a failed
    /// recompute leaves the individual rating committed and is only
    /// logged, never surfaced to the caller.
    pub async fn submit_rating(
        &self,
        caller: Option<Uuid>,
        zone_id: &str,
        enclosure_id: &str,
        value: f64,
    ) -> ParkResult<()> {
        let user_id = caller.ok_or(ParkError::Unauthenticated)?;

        let existing = self
            .rating_repo
            .find_by_user(user_id, zone_id, enclosure_id)
            .await?;

        match existing {
            Some(rating) => {
                self.rating_repo.update_value(rating.id, value).await?;
            }
            None => {
                self.rating_repo
                    .create(CreateRating {
                        user_id,
                        zone_id: zone_id.to_string(),
                        enclosure_id: enclosure_id.to_string(),
                        value,
                    })
                    .await?;
            }
        }

        if let Err(e) = self.recompute_average(zone_id, enclosure_id).await {
            warn!(
                zone_id,
                enclosure_id,
                error = %e,
                "failed to update enclosure average"
            );
        }

        Ok(())
    }

    /// The caller's stored rating for an enclosure, or the `0.0`
    /// sentinel when the caller is anonymous or has not rated yet.
    pub async fn get_user_rating(
        &self,
        caller: Option<Uuid>,
        zone_id: &str,
        enclosure_id: &str,
    ) -> ParkResult<f64> {
        let Some(user_id) = caller else {
            return Ok(0.0);
        };

        let rating = self
            .rating_repo
            .find_by_user(user_id, zone_id, enclosure_id)
            .await?;

        Ok(rating.map(|r| r.value).unwrap_or(0.0))
    }

    /// Recompute and persist the enclosure average: arithmetic mean of
    /// all stored ratings, rounded to one decimal. Skipped when no
    /// ratings exist.
    async fn recompute_average(&self, zone_id: &str, enclosure_id: &str) -> ParkResult<()> {
        let ratings = self
            .rating_repo
            .list_by_enclosure(zone_id, enclosure_id)
            .await?;
        if ratings.is_empty() {
            return Ok(());
        }

        let sum: f64 = ratings.iter().map(|r| r.value).sum();
        let average = round_to_tenth(sum / ratings.len() as f64);

        self.enclosure_repo
            .set_average_rating(zone_id, enclosure_id, average)
            .await
    }
}
