//! Player identity as seen by the engine.

use serde::{Deserialize, Serialize};

/// Identity and balance of a player, as reported by the account collaborator.
///
/// The engine reads these fields to validate and display stakes and never
/// mutates them; balance changes belong to the settlement collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Stable player identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current balance.
    pub balance: u64,
}

impl PlayerProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
        }
    }
}
