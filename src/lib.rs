//! A blackjack table engine with game rooms and an asynchronous player
//! action boundary.
//!
//! The crate provides a [`Table`] type that runs full rounds inside a
//! [`Room`]: dealing, per-seat turns, automated dealer play, and winner
//! resolution. Player decisions cross the async boundary through the
//! [`ActionPrompt`] trait, settlement leaves through [`SettlementSink`],
//! and rooms are provisioned against an external [`RoomRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{PlayerProfile, RoomId, Table, TableOptions};
//!
//! # fn main() -> Result<(), bjtable::RoomError> {
//! let table = Table::new(RoomId::new("demo-1"), TableOptions::default(), 42)?;
//! table.seat_player(PlayerProfile::new("p-1", "Ada", 100))?;
//! table.seat_player(PlayerProfile::new("p-2", "Grace", 100))?;
//! // With two seats the room is active; `table.play_round(..)` runs a round.
//! # Ok(()) }
//! ```

pub mod action;
pub mod card;
pub mod error;
pub mod events;
pub mod hand;
pub mod options;
pub mod player;
pub mod provision;
pub mod result;
pub mod room;
pub mod shoe;
mod sync;
pub mod table;

// Re-export main types
pub use action::{Action, ActionPrompt, TurnView};
pub use card::Rank;
pub use error::{ProvisioningError, RoomError, RoundError};
pub use events::{DiscardSettlement, SettlementRecord, SettlementSink};
pub use hand::{DealerHand, Hand};
pub use options::TableOptions;
pub use player::PlayerProfile;
pub use provision::{RegistryError, RoomProvisioner, RoomRegistry};
pub use result::{Outcome, RoundResult, SeatResult};
pub use room::{Room, RoomId, RoomState, Seat, SeatId};
pub use shoe::{InfiniteShoe, Shoe};
pub use table::Table;
