//! Table configuration options.

use std::time::Duration;

use crate::error::RoomError;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use std::time::Duration;
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_capacity(6)
///     .with_entry_stake(25)
///     .with_action_timeout(Duration::from_secs(10));
/// ```
///
/// Options are validated when the room is created; an invalid configuration
/// is rejected whole, never partially applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Maximum number of seats.
    pub capacity: usize,
    /// Seats required before rounds may run.
    pub min_occupancy: usize,
    /// Stake required from every seated player, per round.
    pub entry_stake: u64,
    /// How long to wait for a player's action before standing them.
    pub action_timeout: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            capacity: 4,
            min_occupancy: 2,
            entry_stake: 10,
            action_timeout: Duration::from_secs(30),
        }
    }
}

impl TableOptions {
    /// Sets the seat capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_capacity(6);
    /// assert_eq!(options.capacity, 6);
    /// ```
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the minimum occupancy required to start a round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_occupancy(3);
    /// assert_eq!(options.min_occupancy, 3);
    /// ```
    #[must_use]
    pub const fn with_min_occupancy(mut self, min_occupancy: usize) -> Self {
        self.min_occupancy = min_occupancy;
        self
    }

    /// Sets the per-round entry stake.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_entry_stake(50);
    /// assert_eq!(options.entry_stake, 50);
    /// ```
    #[must_use]
    pub const fn with_entry_stake(mut self, entry_stake: u64) -> Self {
        self.entry_stake = entry_stake;
        self
    }

    /// Sets the action-request timeout.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_action_timeout(Duration::from_secs(5));
    /// assert_eq!(options.action_timeout, Duration::from_secs(5));
    /// ```
    #[must_use]
    pub const fn with_action_timeout(mut self, timeout: Duration) -> Self {
        self.action_timeout = timeout;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum occupancy is zero, the capacity does
    /// not cover it, or the entry stake is zero.
    pub const fn validate(&self) -> Result<(), RoomError> {
        if self.min_occupancy == 0 {
            return Err(RoomError::InvalidMinimumOccupancy);
        }
        if self.capacity < self.min_occupancy {
            return Err(RoomError::InvalidCapacity);
        }
        if self.entry_stake == 0 {
            return Err(RoomError::InvalidEntryStake);
        }
        Ok(())
    }
}
