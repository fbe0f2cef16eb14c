//! Per-player resource state.
//!
//! Fields are public for reading and for test setup; game rules mutate them
//! only through [`crate::turn::TurnState`], which owns the clamping and death
//! bookkeeping.

use crate::config::StartingStats;
use crate::state::ItemCard;

/// Health, economy, dice and turn-skip bookkeeping of one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    /// Stored but not applied to incoming damage.
    pub defence: i32,
    pub gold: i32,
    pub fame: i32,
    /// May go negative; no floor is enforced.
    pub dice_count: i32,
    /// Turns granted back since the last skip-triggering event.
    pub turn_skip_count: i32,
    pub turn_skip_cap: i32,
    /// Set by the death check, cleared when a forced skip revives the player.
    pub was_dead: bool,
    pub is_villain: bool,
    /// The next monster encounter may be skipped.
    pub skip_monster: bool,
    pub items: Vec<ItemCard>,
}

impl PlayerStats {
    /// Builds stats at full health with an empty hand.
    ///
    /// The turn-skip counter starts at its cap so the first turn is skipped
    /// rather than granted.
    pub fn from_starting(starting: &StartingStats) -> Self {
        Self {
            health: starting.max_health,
            max_health: starting.max_health,
            strength: starting.strength,
            defence: starting.defence,
            gold: starting.gold,
            fame: starting.fame,
            dice_count: starting.dice_count,
            turn_skip_count: starting.turn_skip_cap,
            turn_skip_cap: starting.turn_skip_cap,
            was_dead: false,
            is_villain: false,
            skip_monster: false,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<ItemCard>) -> Self {
        self.items = items;
        self
    }

    pub fn has_died(&self) -> bool {
        self.health == 0
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, index: usize) -> Option<&ItemCard> {
        self.items.get(index)
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::from_starting(&StartingStats::default())
    }
}
