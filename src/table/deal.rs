use log::debug;

use crate::error::RoundError;
use crate::room::RoomState;
use crate::shoe::Shoe;

use super::Table;

impl<S: Shoe> Table<S> {
    /// Deals two cards to every occupied seat, then two to the dealer. The
    /// dealer's first card is the up-card, the second stays the hole card.
    ///
    /// Preconditions are checked before anything is drawn, so a rejected
    /// round leaves every hand untouched.
    pub(super) fn deal_initial_hands(&self) -> Result<(), RoundError> {
        let mut room = self.room.lock();

        if room.occupancy() < room.options().min_occupancy {
            return Err(RoundError::BelowMinimumOccupancy);
        }
        if room.state() != RoomState::Active {
            return Err(RoundError::RoomNotActive);
        }

        let mut shoe = self.shoe.lock();

        for (seat, entry) in room.seats_mut().iter_mut().enumerate() {
            let first = shoe.draw();
            let second = shoe.draw();
            debug!("seat {seat}: dealt {first} {second}");
            entry.hand_mut().add_card(first);
            entry.hand_mut().add_card(second);
        }

        let mut dealer = self.dealer_hand.lock();
        let up = shoe.draw();
        let hole = shoe.draw();
        debug!("dealer: dealt {up} and a hole card");
        dealer.add_card(up);
        dealer.add_card(hole);

        Ok(())
    }
}
