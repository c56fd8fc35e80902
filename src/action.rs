//! The action-request boundary between the engine and player transports.

use async_trait::async_trait;

use crate::card::Rank;
use crate::room::SeatId;

/// A player's decision at a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Stop drawing for the round.
    Stand,
}

/// What a player sees when asked to act: their own cards and score plus the
/// dealer's visible up-card.
#[derive(Debug, Clone)]
pub struct TurnView {
    /// Seat being asked to act.
    pub seat: SeatId,
    /// Display name of the seated player.
    pub player_name: String,
    /// The seat's cards, in deal order.
    pub cards: Vec<Rank>,
    /// Current score of the seat's hand.
    pub score: u8,
    /// The dealer's up-card.
    pub dealer_up_card: Rank,
}

/// Transport-agnostic source of player decisions.
///
/// The engine awaits each request under its configured timeout; a transport
/// that does not answer in time is treated as standing. Implementations may
/// be a console, a network session, or a bot.
#[async_trait]
pub trait ActionPrompt: Send + Sync {
    /// Requests a hit-or-stand decision for the given turn.
    async fn request_action(&self, view: TurnView) -> Action;
}
