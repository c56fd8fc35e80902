//! Table integration tests.

use std::collections::VecDeque;
use std::error::Error as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bjtable::{
    Action, ActionPrompt, DiscardSettlement, Hand, Outcome, PlayerProfile, Rank, RegistryError,
    RoomError, RoomId, RoomProvisioner, RoomRegistry, RoomState, RoundError, SettlementRecord,
    SettlementSink, Shoe, Table, TableOptions, TurnView,
};

fn profile(id: &str, name: &str) -> PlayerProfile {
    PlayerProfile::new(id, name, 100)
}

/// A shoe that deals a scripted sequence and panics if it runs dry.
struct SequenceShoe {
    draws: VecDeque<Rank>,
}

impl SequenceShoe {
    fn new(draws: &[Rank]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl Shoe for SequenceShoe {
    fn draw(&mut self) -> Rank {
        self.draws.pop_front().expect("scripted shoe ran dry")
    }
}

/// A prompt that replays a scripted list of actions, standing once empty.
struct ScriptedPrompt {
    actions: Mutex<VecDeque<Action>>,
}

impl ScriptedPrompt {
    fn new(actions: &[Action]) -> Self {
        Self {
            actions: Mutex::new(actions.iter().copied().collect()),
        }
    }
}

#[async_trait]
impl ActionPrompt for ScriptedPrompt {
    async fn request_action(&self, _view: TurnView) -> Action {
        self.actions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Action::Stand)
    }
}

/// A prompt that must never be asked.
struct PanicPrompt;

#[async_trait]
impl ActionPrompt for PanicPrompt {
    async fn request_action(&self, view: TurnView) -> Action {
        panic!("unexpected action request for seat {}", view.seat);
    }
}

/// A prompt that never answers.
struct StallPrompt;

#[async_trait]
impl ActionPrompt for StallPrompt {
    async fn request_action(&self, _view: TurnView) -> Action {
        std::future::pending().await
    }
}

/// A prompt that closes the room on its first request, then stands.
struct ClosingPrompt {
    table: Arc<Table<SequenceShoe>>,
}

#[async_trait]
impl ActionPrompt for ClosingPrompt {
    async fn request_action(&self, _view: TurnView) -> Action {
        self.table.close_room();
        Action::Stand
    }
}

/// A prompt that records every view it is shown, then stands.
#[derive(Default)]
struct ViewRecordingPrompt {
    views: Mutex<Vec<TurnView>>,
}

#[async_trait]
impl ActionPrompt for ViewRecordingPrompt {
    async fn request_action(&self, view: TurnView) -> Action {
        self.views.lock().unwrap().push(view);
        Action::Stand
    }
}

#[derive(Default)]
struct RecordingSink {
    rounds: Mutex<Vec<(RoomId, Vec<SettlementRecord>)>>,
}

impl SettlementSink for RecordingSink {
    fn settle_round(&self, room: &RoomId, records: &[SettlementRecord]) {
        self.rounds
            .lock()
            .unwrap()
            .push((room.clone(), records.to_vec()));
    }
}

struct StubRegistry;

#[async_trait]
impl RoomRegistry for StubRegistry {
    async fn create_room(
        &self,
        kind: &str,
        players: &[PlayerProfile],
    ) -> Result<RoomId, RegistryError> {
        Ok(RoomId::new(format!("{kind}-{}", players.len())))
    }
}

struct FailingRegistry;

#[async_trait]
impl RoomRegistry for FailingRegistry {
    async fn create_room(
        &self,
        _kind: &str,
        _players: &[PlayerProfile],
    ) -> Result<RoomId, RegistryError> {
        Err("registry unavailable".into())
    }
}

#[test]
fn scores_sum_without_aces() {
    let mut hand = Hand::new();
    hand.add_card(Rank::Seven);
    hand.add_card(Rank::King);
    hand.add_card(Rank::Two);
    assert_eq!(hand.score(), 19);
}

#[test]
fn single_ace_softens_once_over_21() {
    let mut hand = Hand::new();
    hand.add_card(Rank::Ace);
    hand.add_card(Rank::King);
    assert_eq!(hand.score(), 21);

    hand.add_card(Rank::Five);
    // 26 raw; the ace drops to 1.
    assert_eq!(hand.score(), 16);
}

#[test]
fn several_aces_soften_one_by_one() {
    let mut hand = Hand::new();
    hand.add_card(Rank::Ace);
    hand.add_card(Rank::Ace);
    hand.add_card(Rank::Nine);
    assert_eq!(hand.score(), 21);

    let mut hand = Hand::new();
    hand.add_card(Rank::Ace);
    hand.add_card(Rank::Ace);
    hand.add_card(Rank::Ace);
    hand.add_card(Rank::King);
    assert_eq!(hand.score(), 13);
}

#[test]
fn outcome_resolution_order() {
    assert_eq!(Outcome::from_scores(22, 17), Outcome::PlayerBust);
    assert_eq!(Outcome::from_scores(22, 22), Outcome::PlayerBust);
    assert_eq!(Outcome::from_scores(18, 22), Outcome::DealerBust);
    assert_eq!(Outcome::from_scores(20, 18), Outcome::PlayerWins);
    assert_eq!(Outcome::from_scores(17, 19), Outcome::DealerWins);
    assert_eq!(Outcome::from_scores(19, 21), Outcome::DealerWins);
    // The dealer-21 clause fires even on an exact tie at 21.
    assert_eq!(Outcome::from_scores(21, 21), Outcome::DealerWins);
    // An exact tie below 21 is a push.
    assert_eq!(Outcome::from_scores(18, 18), Outcome::Push);
}

#[test]
fn invalid_configurations_are_rejected() {
    let options = TableOptions::default().with_capacity(1).with_min_occupancy(2);
    assert_eq!(
        Table::new(RoomId::new("r"), options, 1).err(),
        Some(RoomError::InvalidCapacity)
    );

    let options = TableOptions::default().with_min_occupancy(0);
    assert_eq!(
        Table::new(RoomId::new("r"), options, 1).err(),
        Some(RoomError::InvalidMinimumOccupancy)
    );

    let options = TableOptions::default().with_entry_stake(0);
    assert_eq!(
        Table::new(RoomId::new("r"), options, 1).err(),
        Some(RoomError::InvalidEntryStake)
    );
}

#[test]
fn seating_respects_capacity_and_lifecycle() {
    let options = TableOptions::default().with_capacity(2).with_min_occupancy(2);
    let table = Table::new(RoomId::new("r"), options, 1).unwrap();
    assert_eq!(table.room_state(), RoomState::Forming);

    table.seat_player(profile("p-1", "Ada")).unwrap();
    assert_eq!(table.room_state(), RoomState::Forming);

    table.seat_player(profile("p-2", "Grace")).unwrap();
    assert_eq!(table.room_state(), RoomState::Active);

    assert_eq!(
        table.seat_player(profile("p-3", "Edsger")).err(),
        Some(RoomError::RoomFull)
    );
    assert_eq!(table.occupancy(), 2);

    table.close_room();
    assert_eq!(table.room_state(), RoomState::Closed);
    assert_eq!(
        table.seat_player(profile("p-4", "Barbara")).err(),
        Some(RoomError::RoomClosed)
    );
}

#[test]
fn seating_requires_the_entry_stake() {
    let table = Table::new(RoomId::new("r"), TableOptions::default(), 1).unwrap();
    let broke = PlayerProfile::new("p-1", "Ada", 5);
    assert_eq!(
        table.seat_player(broke).err(),
        Some(RoomError::EntryStakeNotMet)
    );
    assert_eq!(table.occupancy(), 0);
}

#[test]
fn with_players_builds_an_active_table() {
    let table = Table::with_players(
        RoomId::new("r"),
        TableOptions::default(),
        9,
        vec![profile("p-1", "Ada"), profile("p-2", "Grace")],
    )
    .unwrap();
    assert_eq!(table.room_state(), RoomState::Active);
    assert_eq!(table.players().len(), 2);
}

#[tokio::test]
async fn round_below_minimum_is_rejected_before_dealing() {
    // An empty scripted shoe panics on any draw, so passing proves nothing
    // was dealt.
    let shoe = SequenceShoe::new(&[]);
    let table = Table::with_shoe(RoomId::new("r"), TableOptions::default(), shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();

    let err = table.play_round(&PanicPrompt, &DiscardSettlement).await.err();
    assert_eq!(err, Some(RoundError::BelowMinimumOccupancy));
    assert!(table.seat(0).unwrap().hand().is_empty());
}

#[tokio::test]
async fn two_player_round_resolves_against_dealer() {
    let shoe = SequenceShoe::new(&[
        Rank::Ten,
        Rank::Queen, // seat 0: 20
        Rank::Ten,
        Rank::Eight, // seat 1: 18
        Rank::Ten,
        Rank::Nine, // dealer: 19, stands without drawing
    ]);
    let table = Table::with_shoe(RoomId::new("casino-1"), TableOptions::default(), shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();
    table.seat_player(profile("p-2", "Grace")).unwrap();

    let prompt = ScriptedPrompt::new(&[Action::Stand, Action::Stand]);
    let sink = RecordingSink::default();
    let result = table.play_round(&prompt, &sink).await.unwrap();

    assert!(!result.aborted);
    assert_eq!(result.dealer_score, 19);
    assert_eq!(result.seats[0].score, 20);
    assert_eq!(result.seats[0].outcome, Outcome::PlayerWins);
    assert_eq!(result.seats[1].score, 18);
    assert_eq!(result.seats[1].outcome, Outcome::DealerWins);

    let rounds = sink.rounds.lock().unwrap();
    assert_eq!(rounds.len(), 1);
    let (room, records) = &rounds[0];
    assert_eq!(room.as_str(), "casino-1");
    assert_eq!(
        records[0],
        SettlementRecord {
            player_id: "p-1".into(),
            stake: 10,
            outcome: Outcome::PlayerWins,
        }
    );
    assert_eq!(records[1].outcome, Outcome::DealerWins);

    // Round state is discarded; seating survives.
    assert!(table.seat(0).unwrap().hand().is_empty());
    assert_eq!(table.occupancy(), 2);
    assert_eq!(table.room_state(), RoomState::Active);
}

#[tokio::test]
async fn standing_seats_beat_a_seventeen_dealer() {
    let shoe = SequenceShoe::new(&[
        Rank::Ten,
        Rank::Queen, // seat 0: 20
        Rank::Ten,
        Rank::Nine, // seat 1: 19
        Rank::Ten,
        Rank::Seven, // dealer: 17, stands without drawing
    ]);
    let table = Table::with_shoe(RoomId::new("r"), TableOptions::default(), shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();
    table.seat_player(profile("p-2", "Grace")).unwrap();

    let prompt = ScriptedPrompt::new(&[Action::Stand, Action::Stand]);
    let result = table.play_round(&prompt, &DiscardSettlement).await.unwrap();

    // A higher standing score wins; the dealer drew nothing at 17.
    assert_eq!(result.dealer_cards.len(), 2);
    assert_eq!(result.seats[0].outcome, Outcome::PlayerWins);
    assert_eq!(result.seats[1].outcome, Outcome::PlayerWins);
}

#[tokio::test]
async fn dealer_draws_until_seventeen() {
    let shoe = SequenceShoe::new(&[
        Rank::Ten,
        Rank::Ten, // seat 0: 20
        Rank::Ten,
        Rank::Nine, // seat 1: 19
        Rank::Two,
        Rank::Three, // dealer: 5
        Rank::Six,   // dealer: 11
        Rank::Five,  // dealer: 16
        Rank::Four,  // dealer: 20, stop
    ]);
    let table = Table::with_shoe(RoomId::new("r"), TableOptions::default(), shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();
    table.seat_player(profile("p-2", "Grace")).unwrap();

    let prompt = ScriptedPrompt::new(&[Action::Stand, Action::Stand]);
    let result = table.play_round(&prompt, &DiscardSettlement).await.unwrap();

    assert!(result.dealer_score >= 17);
    assert_eq!(result.dealer_score, 20);
    assert_eq!(result.dealer_cards.len(), 5);
    // An exact tie below 21 pushes; a lower score loses.
    assert_eq!(result.seats[0].outcome, Outcome::Push);
    assert_eq!(result.seats[1].outcome, Outcome::DealerWins);
}

#[tokio::test]
async fn natural_twenty_one_skips_the_action_request() {
    let options = TableOptions::default().with_min_occupancy(1);
    let shoe = SequenceShoe::new(&[
        Rank::Ace,
        Rank::King, // seat 0: 21 off the deal
        Rank::Ten,
        Rank::Nine, // dealer: 19
    ]);
    let table = Table::with_shoe(RoomId::new("r"), options, shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();

    // PanicPrompt proves no action was requested.
    let result = table.play_round(&PanicPrompt, &DiscardSettlement).await.unwrap();
    assert_eq!(result.seats[0].score, 21);
    assert_eq!(result.seats[0].outcome, Outcome::PlayerWins);
}

#[tokio::test]
async fn hitting_past_twenty_one_busts_at_resolution() {
    let options = TableOptions::default().with_min_occupancy(1);
    let shoe = SequenceShoe::new(&[
        Rank::Ten,
        Rank::Five, // seat 0: 15
        Rank::Ten,
        Rank::Seven, // dealer: 17
        Rank::Nine,  // seat 0 hits to 24
    ]);
    let table = Table::with_shoe(RoomId::new("r"), options, shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();

    // One hit is requested; the bust resolves the seat without another ask.
    let prompt = ScriptedPrompt::new(&[Action::Hit]);
    let result = table.play_round(&prompt, &DiscardSettlement).await.unwrap();

    assert!(prompt.actions.lock().unwrap().is_empty());
    assert_eq!(result.seats[0].score, 24);
    assert_eq!(result.seats[0].cards.len(), 3);
    assert_eq!(result.seats[0].outcome, Outcome::PlayerBust);
}

#[tokio::test]
async fn action_requests_show_cards_and_dealer_up_card() {
    let options = TableOptions::default().with_min_occupancy(1);
    let shoe = SequenceShoe::new(&[
        Rank::Ten,
        Rank::Five, // seat 0: 15
        Rank::Nine,
        Rank::Seven, // dealer: 16
        Rank::Two,   // dealer draws to 18
    ]);
    let table = Table::with_shoe(RoomId::new("r"), options, shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();

    let prompt = ViewRecordingPrompt::default();
    table.play_round(&prompt, &DiscardSettlement).await.unwrap();

    let views = prompt.views.lock().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].seat, 0);
    assert_eq!(views[0].player_name, "Ada");
    assert_eq!(views[0].cards, vec![Rank::Ten, Rank::Five]);
    assert_eq!(views[0].score, 15);
    // Only the dealer's up-card is shown, never the hole card.
    assert_eq!(views[0].dealer_up_card, Rank::Nine);
}

#[tokio::test(start_paused = true)]
async fn silent_player_is_stood_after_timeout() {
    let options = TableOptions::default()
        .with_min_occupancy(1)
        .with_action_timeout(Duration::from_secs(5));
    let shoe = SequenceShoe::new(&[
        Rank::Ten,
        Rank::Six, // seat 0: 16
        Rank::Ten,
        Rank::Seven, // dealer: 17
    ]);
    let table = Table::with_shoe(RoomId::new("r"), options, shoe).unwrap();
    table.seat_player(profile("p-1", "Ada")).unwrap();

    let result = table.play_round(&StallPrompt, &DiscardSettlement).await.unwrap();

    // The timeout stood the seat at 16; no card was drawn.
    assert_eq!(result.seats[0].cards.len(), 2);
    assert_eq!(result.seats[0].score, 16);
    assert_eq!(result.seats[0].outcome, Outcome::DealerWins);
}

#[tokio::test]
async fn closing_the_room_aborts_remaining_turns() {
    let shoe = SequenceShoe::new(&[
        Rank::Ten,
        Rank::Five, // seat 0: 15
        Rank::Ten,
        Rank::Six, // seat 1: 16
        Rank::Ten,
        Rank::Nine, // dealer
    ]);
    let table = Arc::new(
        Table::with_shoe(RoomId::new("casino-2"), TableOptions::default(), shoe).unwrap(),
    );
    table.seat_player(profile("p-1", "Ada")).unwrap();
    table.seat_player(profile("p-2", "Grace")).unwrap();

    let prompt = ClosingPrompt {
        table: Arc::clone(&table),
    };
    let sink = RecordingSink::default();
    let result = table.play_round(&prompt, &sink).await.unwrap();

    // Seat 0 stood after closing the room; seat 1 never got a turn. Both
    // settle as aborted, dealt hands intact, and the dealer never plays.
    assert!(result.aborted);
    assert_eq!(result.seats[0].outcome, Outcome::Aborted);
    assert_eq!(result.seats[1].outcome, Outcome::Aborted);
    assert_eq!(result.seats[0].cards.len(), 2);
    assert_eq!(result.seats[1].cards.len(), 2);
    assert_eq!(result.dealer_cards.len(), 2);

    let rounds = sink.rounds.lock().unwrap();
    assert!(rounds[0].1.iter().all(|r| r.outcome == Outcome::Aborted));

    // The closed room accepts no further rounds, and rejects them before
    // touching the shoe.
    assert_eq!(table.room_state(), RoomState::Closed);
    assert_eq!(
        table.play_round(&PanicPrompt, &DiscardSettlement).await.err(),
        Some(RoundError::RoomNotActive)
    );
}

#[test]
fn unimplemented_operations_fail_explicitly() {
    let table = Table::new(RoomId::new("r"), TableOptions::default(), 3).unwrap();
    assert_eq!(
        table.split(0).err(),
        Some(RoundError::Unsupported { op: "split" })
    );
    assert_eq!(
        table.retire(0).err(),
        Some(RoundError::Unsupported { op: "retire" })
    );
    assert_eq!(
        table.place_bet(0, 5).err(),
        Some(RoundError::Unsupported { op: "place_bet" })
    );
}

#[tokio::test]
async fn provisioner_returns_the_registry_room_id() {
    let provisioner = RoomProvisioner::new(StubRegistry);
    let players = vec![profile("p-1", "Ada")];
    let id = provisioner
        .create_active_room("blackjack", &players)
        .await
        .unwrap();
    assert_eq!(id.as_str(), "blackjack-1");
}

#[tokio::test]
async fn provisioner_wraps_registry_failures() {
    let provisioner = RoomProvisioner::new(FailingRegistry);
    let err = provisioner
        .create_active_room("blackjack", &[])
        .await
        .unwrap_err();
    let source = err.source().expect("the registry failure is preserved");
    assert_eq!(source.to_string(), "registry unavailable");
}
