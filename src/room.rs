//! Game rooms: seating, capacity, entry requirements, and lifecycle.

use core::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::RoomError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::player::PlayerProfile;
use crate::result::Outcome;

/// Identifier of a room, assigned by the room registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Index of a seat in a room's seat arena.
pub type SeatId = usize;

/// Room lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomState {
    /// Accepting seats; occupancy is below the minimum.
    Forming,
    /// Minimum occupancy reached; rounds may run.
    Active,
    /// No further rounds; seats remain readable for settlement.
    Closed,
}

/// One seat: a player bound to a hand, a standing flag, and a stake for the
/// current round.
#[derive(Debug, Clone)]
pub struct Seat {
    profile: PlayerProfile,
    hand: Hand,
    standing: bool,
    stake: u64,
    outcome: Option<Outcome>,
}

impl Seat {
    fn new(profile: PlayerProfile, stake: u64) -> Self {
        Self {
            profile,
            hand: Hand::new(),
            standing: false,
            stake,
            outcome: None,
        }
    }

    /// The seated player.
    #[must_use]
    pub const fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// The seat's hand for the current round.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns whether the player has ended their turn.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    pub(crate) const fn set_standing(&mut self) {
        self.standing = true;
    }

    /// Stake committed for the current round.
    #[must_use]
    pub const fn stake(&self) -> u64 {
        self.stake
    }

    /// The seat's outcome, once resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub(crate) fn resolve(&mut self, outcome: Outcome) {
        debug_assert!(self.outcome.is_none(), "seat resolved twice");
        self.outcome = Some(outcome);
    }

    /// Resets the per-round state; the seating itself survives.
    pub(crate) fn clear_round(&mut self) {
        self.hand.clear();
        self.standing = false;
        self.outcome = None;
    }
}

/// A game room: capacity, entry stake, and the seat arena.
///
/// Pure in-memory state plus identity. The room knows nothing about
/// persistence; storage collaborators observe it from the outside.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    options: TableOptions,
    state: RoomState,
    seats: Vec<Seat>,
}

impl Room {
    /// Creates an empty room in the `Forming` state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (capacity below the
    /// minimum occupancy, zero minimum, or a non-positive entry stake).
    /// Nothing is partially applied.
    pub fn new(id: RoomId, options: TableOptions) -> Result<Self, RoomError> {
        options.validate()?;
        Ok(Self {
            id,
            options,
            state: RoomState::Forming,
            seats: Vec::new(),
        })
    }

    /// The room's identifier.
    #[must_use]
    pub const fn id(&self) -> &RoomId {
        &self.id
    }

    /// The room's configuration.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RoomState {
        self.state
    }

    /// Number of occupied seats.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        self.seats.len()
    }

    /// Seats a player, committing the room's entry stake for each round.
    ///
    /// Crossing the minimum occupancy moves the room from `Forming` to
    /// `Active`.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is closed, at capacity, or the player's
    /// balance does not cover the entry stake. A rejected seat changes no
    /// state.
    pub fn seat_player(&mut self, profile: PlayerProfile) -> Result<SeatId, RoomError> {
        if self.state == RoomState::Closed {
            return Err(RoomError::RoomClosed);
        }
        if self.seats.len() >= self.options.capacity {
            return Err(RoomError::RoomFull);
        }
        if profile.balance < self.options.entry_stake {
            return Err(RoomError::EntryStakeNotMet);
        }

        let seat = self.seats.len();
        info!("room {}: seated {} at seat {seat}", self.id, profile.name);
        self.seats.push(Seat::new(profile, self.options.entry_stake));

        if self.state == RoomState::Forming && self.seats.len() >= self.options.min_occupancy {
            self.state = RoomState::Active;
            info!(
                "room {}: active with {} of {} seats",
                self.id,
                self.seats.len(),
                self.options.capacity
            );
        }

        Ok(seat)
    }

    /// Closes the room. No further rounds may start; seats remain readable.
    pub fn close(&mut self) {
        if self.state != RoomState::Closed {
            info!("room {}: closed", self.id);
            self.state = RoomState::Closed;
        }
    }

    /// The seats, in seat order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub(crate) fn seats_mut(&mut self) -> &mut [Seat] {
        &mut self.seats
    }

    /// A single seat, if occupied.
    #[must_use]
    pub fn seat(&self, seat: SeatId) -> Option<&Seat> {
        self.seats.get(seat)
    }

    /// The seated players, in seat order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerProfile> {
        self.seats.iter().map(Seat::profile)
    }

    pub(crate) fn clear_round(&mut self) {
        for seat in &mut self.seats {
            seat.clear_round();
        }
    }
}
