use std::sync::Arc;

use ff_core::errors::SaveOutfitError;
use ff_core::ports::{ClockPort, OutfitRepositoryPort};
use ff_core::{OutfitId, OutfitSession, ViewerContext};
use tracing::{info, warn};

/// Persists the current outfit session as a new outfit row.
pub struct SaveOutfit {
    outfits: Arc<dyn OutfitRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveOutfit {
    pub fn from_ports(outfits: Arc<dyn OutfitRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { outfits, clock }
    }

    /// Serializes `session` as it is right now and inserts it.
    ///
    /// Preconditions (items selected, identity present) are checked before
    /// any request is made. The session itself is never modified.
    #[tracing::instrument(
        name = "usecase.save_outfit.execute",
        skip(self, viewer, session),
        fields(item_count = session.item_count(), avatar = %session.avatar())
    )]
    pub async fn execute(
        &self,
        viewer: &ViewerContext,
        session: &OutfitSession,
    ) -> Result<OutfitId, SaveOutfitError> {
        let record = session.serialize(viewer.identity(), self.clock.now())?;
        let identity = viewer.require_identity("save outfit")?;

        let outfit_id = self
            .outfits
            .insert_outfit(identity, &record)
            .await
            .map_err(|e| {
                warn!(user_id = %identity.user_id, error = %e, "outfit insert failed");
                SaveOutfitError::from(e)
            })?;

        info!(outfit_id = %outfit_id, "outfit saved");
        Ok(outfit_id)
    }
}
