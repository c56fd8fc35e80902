//! Settlement records emitted at round end.

use serde::{Deserialize, Serialize};

use crate::result::Outcome;
use crate::room::RoomId;

/// One seat's stake and outcome for a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Player the record belongs to.
    pub player_id: String,
    /// Amount staked for the round.
    pub stake: u64,
    /// How the seat resolved.
    pub outcome: Outcome,
}

/// Receiver of per-round settlement records.
///
/// Implementations own balance mutation and transaction-history persistence;
/// the engine only emits. Called on the round's task once per round, so
/// implementations should hand records off rather than block.
pub trait SettlementSink: Send + Sync {
    /// Receives the records for one finished round, in seat order.
    fn settle_round(&self, room: &RoomId, records: &[SettlementRecord]);
}

/// A sink that drops every record. Useful for demos and tests that only
/// care about the round report.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSettlement;

impl SettlementSink for DiscardSettlement {
    fn settle_round(&self, _room: &RoomId, _records: &[SettlementRecord]) {}
}
