//! Error types for room, round, and provisioning operations.

use thiserror::Error;

/// Errors that can occur configuring or seating a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoomError {
    /// Capacity is zero or below the minimum occupancy.
    #[error("room capacity must cover the minimum occupancy")]
    InvalidCapacity,
    /// Minimum occupancy is zero.
    #[error("minimum occupancy must be at least one")]
    InvalidMinimumOccupancy,
    /// Entry stake is zero.
    #[error("entry stake must be positive")]
    InvalidEntryStake,
    /// The player's balance does not cover the entry stake.
    #[error("balance does not meet the entry stake")]
    EntryStakeNotMet,
    /// Every seat is occupied.
    #[error("room is full")]
    RoomFull,
    /// The room has been closed.
    #[error("room is closed")]
    RoomClosed,
}

/// Errors that can occur starting a round or invoking a table operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Occupancy is below the room's minimum; nothing was dealt.
    #[error("not enough seated players to start a round")]
    BelowMinimumOccupancy,
    /// The room is not accepting rounds.
    #[error("room is not active")]
    RoomNotActive,
    /// A round is already being played at this table.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// The operation is not offered at this table.
    #[error("{op} is not offered at this table")]
    Unsupported {
        /// Name of the unsupported operation.
        op: &'static str,
    },
}

/// Failure provisioning a room through the external registry.
///
/// The registry's own error is preserved as the source rather than leaked
/// raw to callers.
#[derive(Debug, Error)]
#[error("failed to provision room through the registry")]
pub struct ProvisioningError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ProvisioningError {
    pub(crate) fn new(source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self { source }
    }
}
