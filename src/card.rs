//! Card ranks and the point value table.

use core::fmt;

/// A card rank.
///
/// Blackjack scoring depends only on rank, so suits are not modeled and the
/// shoe deals ranks directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2, worth 2 points.
    Two,
    /// 3, worth 3 points.
    Three,
    /// 4, worth 4 points.
    Four,
    /// 5, worth 5 points.
    Five,
    /// 6, worth 6 points.
    Six,
    /// 7, worth 7 points.
    Seven,
    /// 8, worth 8 points.
    Eight,
    /// 9, worth 9 points.
    Nine,
    /// 10, worth 10 points.
    Ten,
    /// Jack, worth 10 points.
    Jack,
    /// Queen, worth 10 points.
    Queen,
    /// King, worth 10 points.
    King,
    /// Ace, worth 11 points unless softened to 1.
    Ace,
}

impl Rank {
    /// All thirteen ranks, the drawable set of every shoe.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Base point value of the rank. Aces count as 11 here; softening to 1
    /// happens during hand evaluation.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns whether this rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// The rank's table label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
