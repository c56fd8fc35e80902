use log::{debug, info, warn};
use tokio::time::timeout;

use crate::action::{Action, ActionPrompt, TurnView};
use crate::error::RoundError;
use crate::events::{SettlementRecord, SettlementSink};
use crate::result::{Outcome, RoundResult, SeatResult};
use crate::room::{RoomState, SeatId};
use crate::shoe::Shoe;

use super::Table;

impl<S: Shoe> Table<S> {
    /// Plays one full round: deal, per-seat turns, dealer play, resolution.
    ///
    /// Turns run strictly sequentially in seat order; the only suspension
    /// point is the action request, awaited under the configured timeout. A
    /// player that does not answer in time is stood. Closing the room while
    /// a round runs aborts it before the next turn: dealer play is skipped
    /// and every seat settles as [`Outcome::Aborted`].
    ///
    /// One settlement record per seat is handed to `settlement` before the
    /// round state is cleared; the returned report carries the same
    /// outcomes plus the final hands.
    ///
    /// The future should be polled to completion: dropping it mid-round
    /// leaves the round open and later calls return `RoundInProgress`.
    ///
    /// # Errors
    ///
    /// Returns an error, before any card is dealt, if occupancy is below
    /// the room minimum, the room is not active, or a round is already in
    /// progress.
    pub async fn play_round(
        &self,
        prompt: &dyn ActionPrompt,
        settlement: &dyn SettlementSink,
    ) -> Result<RoundResult, RoundError> {
        let occupancy = self.begin_round()?;
        info!(
            "room {}: round started with {occupancy} seats",
            self.room_id()
        );

        let mut aborted = false;
        for seat in 0..occupancy {
            if self.room.lock().state() == RoomState::Closed {
                aborted = true;
                break;
            }
            self.run_seat_turn(seat, prompt).await;
        }

        if aborted {
            self.abort_round();
        } else {
            self.dealer_play();
            self.resolve_round();
        }

        let result = self.collect_result(aborted);
        self.emit_settlement(&result, settlement);
        self.clear_round();
        Ok(result)
    }

    /// Claims the round slot and deals. The slot is only taken once the
    /// deal has succeeded, so a rejected round leaves the table reusable.
    fn begin_round(&self) -> Result<usize, RoundError> {
        let mut in_round = self.in_round.lock();
        if *in_round {
            return Err(RoundError::RoundInProgress);
        }
        self.deal_initial_hands()?;
        *in_round = true;
        Ok(self.room.lock().occupancy())
    }

    /// Runs one seat's turn to resolution.
    ///
    /// At each decision point a score of 21 or more resolves the seat
    /// without a request. Hitting past 21 is allowed; the bust is detected
    /// on the next pass, and the loss itself at resolution.
    async fn run_seat_turn(&self, seat: SeatId, prompt: &dyn ActionPrompt) {
        loop {
            // Snapshot under the lock, release before awaiting.
            let (view, score) = {
                let room = self.room.lock();
                let entry = &room.seats()[seat];
                let score = entry.hand().score();
                let dealer_up_card = self
                    .dealer_hand
                    .lock()
                    .up_card()
                    .expect("dealer up-card is dealt before turns");
                let view = TurnView {
                    seat,
                    player_name: entry.profile().name.clone(),
                    cards: entry.hand().cards().to_vec(),
                    score,
                    dealer_up_card,
                };
                (view, score)
            };

            if score >= 21 {
                debug!("seat {seat}: at {score}, standing without a request");
                self.room.lock().seats_mut()[seat].set_standing();
                return;
            }

            let action_timeout = self.room.lock().options().action_timeout;
            let action = match timeout(action_timeout, prompt.request_action(view)).await {
                Ok(action) => action,
                Err(_) => {
                    warn!(
                        "room {}: seat {seat} did not act within {action_timeout:?}, standing",
                        self.room_id()
                    );
                    Action::Stand
                }
            };

            match action {
                Action::Hit => {
                    let rank = self.shoe.lock().draw();
                    debug!("seat {seat}: hits, drew {rank}");
                    self.room.lock().seats_mut()[seat].hand_mut().add_card(rank);
                }
                Action::Stand => {
                    debug!("seat {seat}: stands at {score}");
                    self.room.lock().seats_mut()[seat].set_standing();
                    return;
                }
            }
        }
    }

    /// Resolves every dealt seat of an aborted round.
    ///
    /// No dealer play happened, so no winner can be determined; every seat
    /// settles as aborted, keeping whatever cards it was dealt.
    fn abort_round(&self) {
        warn!("room {}: round aborted, room closed", self.room_id());
        let mut room = self.room.lock();
        for entry in room.seats_mut() {
            // A seat taken after the deal plays from the next round on.
            if entry.hand().is_empty() {
                continue;
            }
            entry.set_standing();
            entry.resolve(Outcome::Aborted);
        }
    }

    /// Scores every dealt seat against the final dealer hand.
    fn resolve_round(&self) {
        let dealer_score = self.dealer_hand.lock().score();
        let mut room = self.room.lock();
        for (seat, entry) in room.seats_mut().iter_mut().enumerate() {
            if entry.hand().is_empty() {
                continue;
            }
            let outcome = Outcome::from_scores(entry.hand().score(), dealer_score);
            debug!(
                "seat {seat}: {} vs dealer {dealer_score}, {outcome:?}",
                entry.hand().score()
            );
            entry.resolve(outcome);
        }
    }

    /// Builds the round report from the resolved seats.
    fn collect_result(&self, aborted: bool) -> RoundResult {
        let room = self.room.lock();
        let dealer = self.dealer_hand.lock();

        let seats = room
            .seats()
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.hand().is_empty())
            .map(|(seat, entry)| SeatResult {
                seat,
                player_id: entry.profile().id.clone(),
                player_name: entry.profile().name.clone(),
                cards: entry.hand().cards().to_vec(),
                score: entry.hand().score(),
                stake: entry.stake(),
                outcome: entry
                    .outcome()
                    .expect("every seat is resolved before the report"),
            })
            .collect();

        RoundResult {
            seats,
            dealer_cards: dealer.cards().to_vec(),
            dealer_score: dealer.score(),
            aborted,
        }
    }

    /// Emits one settlement record per seat.
    fn emit_settlement(&self, result: &RoundResult, settlement: &dyn SettlementSink) {
        let room_id = self.room_id();
        let records: Vec<SettlementRecord> = result
            .seats
            .iter()
            .map(|seat| SettlementRecord {
                player_id: seat.player_id.clone(),
                stake: seat.stake,
                outcome: seat.outcome,
            })
            .collect();

        info!(
            "room {room_id}: round over, dealer {} ({} seats settled)",
            result.dealer_score,
            records.len()
        );
        settlement.settle_round(&room_id, &records);
    }

    /// Discards the round: hands cleared, standing flags and outcomes
    /// reset. Seating and the room state survive.
    fn clear_round(&self) {
        self.room.lock().clear_round();
        self.dealer_hand.lock().clear();
        *self.in_round.lock() = false;
    }
}
