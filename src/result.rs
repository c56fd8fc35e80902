//! Round outcome and report types.

use serde::{Deserialize, Serialize};

use crate::card::Rank;
use crate::room::SeatId;

/// How a seat resolved against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player went over 21 and loses regardless of the dealer's hand.
    PlayerBust,
    /// Dealer went over 21 and the player wins.
    DealerBust,
    /// Player outscored the dealer.
    PlayerWins,
    /// Dealer outscored the player, or held exactly 21.
    DealerWins,
    /// Exact tie below 21; the stake is returned.
    Push,
    /// The round was aborted before the seat could be resolved.
    Aborted,
}

impl Outcome {
    /// Resolves a player score against the final dealer score.
    ///
    /// Rules apply in order: player bust, dealer bust, higher player score
    /// wins, then the dealer wins on a higher score or an exact 21. What
    /// remains is an exact tie below 21, resolved as a push.
    #[must_use]
    pub const fn from_scores(player: u8, dealer: u8) -> Self {
        if player > 21 {
            Self::PlayerBust
        } else if dealer > 21 {
            Self::DealerBust
        } else if player > dealer {
            Self::PlayerWins
        } else if player < dealer || dealer == 21 {
            Self::DealerWins
        } else {
            Self::Push
        }
    }

    /// Returns whether the seat's stake is won back (or better).
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

/// Result for a single seat.
#[derive(Debug, Clone)]
pub struct SeatResult {
    /// Seat the result belongs to.
    pub seat: SeatId,
    /// Player id of the seat.
    pub player_id: String,
    /// Display name of the seat.
    pub player_name: String,
    /// The seat's final cards.
    pub cards: Vec<Rank>,
    /// The seat's final score.
    pub score: u8,
    /// Stake for the round.
    pub stake: u64,
    /// How the seat resolved.
    pub outcome: Outcome,
}

/// Report of one finished round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Per-seat results, in seat order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Rank>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the round was aborted before dealer play.
    pub aborted: bool,
}
