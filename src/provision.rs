//! Bridges the external room registry to provision active rooms.

use async_trait::async_trait;
use log::{error, info};

use crate::error::ProvisioningError;
use crate::player::PlayerProfile;
use crate::room::RoomId;

/// Failure type reported by registry implementations.
pub type RegistryError = Box<dyn std::error::Error + Send + Sync>;

/// External registry that records rooms and assigns their identifiers.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Creates a room of the given kind, seeded with the given players,
    /// and returns its identifier.
    async fn create_room(
        &self,
        kind: &str,
        players: &[PlayerProfile],
    ) -> Result<RoomId, RegistryError>;
}

/// Adapter that provisions active rooms through a [`RoomRegistry`].
///
/// The adapter only awaits in the caller's task. It never spawns, owns, or
/// tears down an execution context; acquiring one is the caller's job, done
/// once and reused across calls.
pub struct RoomProvisioner<R: RoomRegistry> {
    registry: R,
}

impl<R: RoomRegistry> RoomProvisioner<R> {
    /// Creates an adapter over the given registry.
    pub const fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Creates an active room seeded with the given players and returns
    /// its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError`] wrapping the registry's failure as its
    /// source; the raw collaborator error never reaches the caller
    /// directly.
    pub async fn create_active_room(
        &self,
        kind: &str,
        players: &[PlayerProfile],
    ) -> Result<RoomId, ProvisioningError> {
        match self.registry.create_room(kind, players).await {
            Ok(id) => {
                info!(
                    "provisioned {kind} room {id} with {} initial players",
                    players.len()
                );
                Ok(id)
            }
            Err(source) => {
                error!("room registry failed while provisioning {kind} room: {source}");
                Err(ProvisioningError::new(source))
            }
        }
    }
}
