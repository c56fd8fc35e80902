//! The blackjack table engine: one room, one shoe, one dealer.

use crate::error::{RoomError, RoundError};
use crate::hand::DealerHand;
use crate::options::TableOptions;
use crate::player::PlayerProfile;
use crate::room::{Room, RoomId, RoomState, Seat, SeatId};
use crate::shoe::{InfiniteShoe, Shoe};
use crate::sync::Mutex;

mod deal;
mod dealer;
mod turns;

/// A blackjack table that runs full rounds inside a [`Room`].
///
/// All methods take `&self`; state lives behind mutexes so a table can be
/// shared across tasks — in particular, a room may be closed while a round
/// is awaiting a player action, which aborts the round before the next
/// turn. No lock is held across an await point.
///
/// The table is generic over its [`Shoe`] so tests can script exact deals;
/// production tables use the seeded [`InfiniteShoe`].
pub struct Table<S: Shoe = InfiniteShoe> {
    room: Mutex<Room>,
    shoe: Mutex<S>,
    dealer_hand: Mutex<DealerHand>,
    in_round: Mutex<bool>,
}

impl Table<InfiniteShoe> {
    /// Creates a table with a seeded infinite shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the room configuration is invalid.
    pub fn new(id: RoomId, options: TableOptions, seed: u64) -> Result<Self, RoomError> {
        Self::with_shoe(id, options, InfiniteShoe::from_seed(seed))
    }

    /// Creates a table pre-seated with the given players.
    ///
    /// Seating enough players to reach the minimum occupancy leaves the
    /// room active and ready for its first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the room configuration is invalid or any player
    /// cannot be seated.
    pub fn with_players(
        id: RoomId,
        options: TableOptions,
        seed: u64,
        players: Vec<PlayerProfile>,
    ) -> Result<Self, RoomError> {
        let table = Self::new(id, options, seed)?;
        for profile in players {
            table.seat_player(profile)?;
        }
        Ok(table)
    }
}

impl<S: Shoe> Table<S> {
    /// Creates a table with the given shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the room configuration is invalid.
    pub fn with_shoe(id: RoomId, options: TableOptions, shoe: S) -> Result<Self, RoomError> {
        let room = Room::new(id, options)?;
        Ok(Self {
            room: Mutex::new(room),
            shoe: Mutex::new(shoe),
            dealer_hand: Mutex::new(DealerHand::new()),
            in_round: Mutex::new(false),
        })
    }

    /// Seats a player at the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is closed, full, or the player's
    /// balance does not cover the entry stake.
    pub fn seat_player(&self, profile: PlayerProfile) -> Result<SeatId, RoomError> {
        self.room.lock().seat_player(profile)
    }

    /// The room's identifier.
    #[must_use]
    pub fn room_id(&self) -> RoomId {
        self.room.lock().id().clone()
    }

    /// Current room lifecycle state.
    #[must_use]
    pub fn room_state(&self) -> RoomState {
        self.room.lock().state()
    }

    /// Number of occupied seats.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        self.room.lock().occupancy()
    }

    /// Snapshot of the seated players, in seat order.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerProfile> {
        self.room.lock().players().cloned().collect()
    }

    /// Snapshot of a seat.
    #[must_use]
    pub fn seat(&self, seat: SeatId) -> Option<Seat> {
        self.room.lock().seat(seat).cloned()
    }

    /// Snapshot of the dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> DealerHand {
        self.dealer_hand.lock().clone()
    }

    /// Closes the room. A round awaiting a player action aborts before the
    /// next turn; already-resolved seats keep their hands.
    pub fn close_room(&self) {
        self.room.lock().close();
    }

    /// Splitting pairs.
    ///
    /// # Errors
    ///
    /// Always fails: splitting is not offered at this table.
    pub fn split(&self, _seat: SeatId) -> Result<(), RoundError> {
        Err(RoundError::Unsupported { op: "split" })
    }

    /// Retiring from a round in progress.
    ///
    /// # Errors
    ///
    /// Always fails: retiring mid-round is not offered at this table.
    pub fn retire(&self, _seat: SeatId) -> Result<(), RoundError> {
        Err(RoundError::Unsupported { op: "retire" })
    }

    /// Wagering beyond the room's entry stake.
    ///
    /// # Errors
    ///
    /// Always fails: per-round wagers are not offered at this table.
    pub fn place_bet(&self, _seat: SeatId, _amount: u64) -> Result<(), RoundError> {
        Err(RoundError::Unsupported { op: "place_bet" })
    }
}
