//! Player and dealer hand representations and scoring.

use crate::card::Rank;

/// Scores a sequence of ranks.
///
/// Aces are counted as 11, then softened to 1 one at a time while the total
/// exceeds 21. Hands with several aces soften each of them as needed.
fn score_cards(cards: &[Rank]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for rank in cards {
        if rank.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(rank.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// A seat's hand: an append-only sequence of ranks for one round.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a freshly drawn rank. Cards are never removed or reordered.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// The cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Scores the hand with ace softening. Pure; no side effects.
    #[must_use]
    pub fn score(&self) -> u8 {
        score_cards(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// During player turns only the first card is visible; the hole card is
/// revealed when dealer play begins.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    cards: Vec<Rank>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// All cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// The visible card (first card), if dealt.
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    /// Returns whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Scores the full hand, softening aces the same way player hands do.
    #[must_use]
    pub fn score(&self) -> u8 {
        score_cards(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
