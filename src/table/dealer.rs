use log::{debug, info};

use crate::shoe::Shoe;

use super::Table;

/// The dealer draws below this score and stands at or above it.
const DEALER_STAND_SCORE: u8 = 17;

impl<S: Shoe> Table<S> {
    /// Dealer auto-play: reveal the hole card, then draw while the score is
    /// below 17.
    ///
    /// The loop terminates for any shoe: every draw adds at least one point
    /// and the threshold check runs on a softened score.
    pub(super) fn dealer_play(&self) {
        let mut shoe = self.shoe.lock();
        let mut dealer = self.dealer_hand.lock();

        dealer.reveal_hole();
        debug!("dealer reveals hole card, at {}", dealer.score());

        while dealer.score() < DEALER_STAND_SCORE {
            let rank = shoe.draw();
            debug!("dealer draws {rank}");
            dealer.add_card(rank);
        }

        info!("dealer stands at {}", dealer.score());
    }
}
