//! Combat, reward and turn-skip rules applied to a player's stats.
//!
//! [`TurnState`] borrows a [`PlayerStats`] exclusively for the duration of a
//! rule application, the same way the walker owns its movement state. All
//! clamping and the death bookkeeping happen here, so call sites never
//! restore invariants themselves:
//!
//! - `0 <= health <= max_health`
//! - `0 <= turn_skip_count <= turn_skip_cap`
//! - a death check that finds `health == 0` sets `was_dead` until a forced
//!   turn skip revives the player
//!
//! None of the operations fail. Gold and dice have no floor.

use crate::config::StartingStats;
use crate::env::GameFlow;
use crate::state::{ItemCard, PlayerStats};

/// Rule engine over one player's stats.
pub struct TurnState<'a> {
    stats: &'a mut PlayerStats,
    flow: &'a mut dyn GameFlow,
}

impl<'a> TurnState<'a> {
    pub fn new(stats: &'a mut PlayerStats, flow: &'a mut dyn GameFlow) -> Self {
        Self { stats, flow }
    }

    pub fn stats(&self) -> &PlayerStats {
        self.stats
    }

    fn health_ceiling(&self) -> i32 {
        self.stats.max_health.max(0)
    }

    /// Subtracts `amount` from health, stopping at zero.
    ///
    /// Defence is not applied and no death check runs; callers resolving a
    /// lost combat follow up with [`Self::handle_combat_death`].
    pub fn apply_damage(&mut self, amount: i32) {
        let before = self.stats.health;
        self.stats.health = before
            .saturating_sub(amount)
            .clamp(0, self.health_ceiling());
        tracing::info!(amount, before, after = self.stats.health, "damage taken");
    }

    /// Adds `delta` to health within `[0, max_health]`, then runs the death
    /// check.
    pub fn change_health(&mut self, delta: i32) {
        let before = self.stats.health;
        self.stats.health = before
            .saturating_add(delta)
            .clamp(0, self.health_ceiling());
        tracing::info!(delta, before, after = self.stats.health, "health changed");
        self.run_death_check();
    }

    /// Marks the player dead if health is exhausted. Death resets the
    /// turn-skip counter so the following turns are withheld until the cap
    /// is reached again.
    pub fn run_death_check(&mut self) {
        if self.stats.health <= 0 {
            self.stats.health = 0;
            self.stats.turn_skip_count = 0;
            if !self.stats.was_dead {
                tracing::info!("player died");
            }
            self.stats.was_dead = true;
        }
    }

    /// Applies the fame penalty of a lost combat, then the death check.
    pub fn handle_combat_death(&mut self, fame_delta: i32) {
        self.change_fame(fame_delta);
        self.run_death_check();
    }

    /// Adds `delta` to fame. Fame at or below zero ends the game; the flow is
    /// notified on every change that leaves fame there.
    pub fn change_fame(&mut self, delta: i32) {
        let before = self.stats.fame;
        self.stats.fame = before.saturating_add(delta);
        tracing::info!(delta, before, after = self.stats.fame, "fame changed");

        if self.stats.fame <= 0 {
            tracing::warn!(fame = self.stats.fame, "fame exhausted, game over");
            self.flow.game_over(self.stats.fame);
        }
    }

    pub fn change_gold(&mut self, delta: i32) {
        let before = self.stats.gold;
        self.stats.gold = before.saturating_add(delta);
        tracing::info!(delta, before, after = self.stats.gold, "gold changed");
    }

    /// Adds `delta` dice. The count may go negative.
    pub fn change_dice_count(&mut self, delta: i32) {
        self.stats.dice_count = self.stats.dice_count.saturating_add(delta);
    }

    pub fn reset_dice_count(&mut self) {
        self.stats.dice_count = StartingStats::DEFAULT_DICE_COUNT;
    }

    pub fn change_turn_skip_count(&mut self, delta: i32) {
        self.stats.turn_skip_count = self
            .stats
            .turn_skip_count
            .saturating_add(delta)
            .clamp(0, self.stats.turn_skip_cap.max(0));
    }

    /// Decides whether this turn is skipped.
    ///
    /// Below the cap the player earns one count back and plays normally
    /// (`false`). At the cap the turn is skipped (`true`); a player who died
    /// is restored to full health on that skip.
    pub fn consume_turn_skip(&mut self) -> bool {
        if self.stats.turn_skip_count < self.stats.turn_skip_cap {
            self.stats.turn_skip_count += 1;
            return false;
        }

        if self.stats.was_dead {
            let max_health = self.stats.max_health;
            self.change_health(max_health);
            self.stats.was_dead = false;
            tracing::info!(health = self.stats.health, "player revived");
        }
        true
    }

    pub fn add_item(&mut self, card: ItemCard) {
        tracing::debug!(item = %card.name, "item added");
        self.stats.items.push(card);
    }

    /// Removes the first card equal to `card`. Returns whether one was found.
    pub fn remove_item(&mut self, card: &ItemCard) -> bool {
        match self.stats.items.iter().position(|held| held == card) {
            Some(index) => {
                self.stats.items.remove(index);
                tracing::debug!(item = %card.name, "item removed");
                true
            }
            None => false,
        }
    }

    pub fn set_villain(&mut self, is_villain: bool) {
        self.stats.is_villain = is_villain;
    }

    pub fn set_skip_monster(&mut self, skip_monster: bool) {
        self.stats.skip_monster = skip_monster;
    }
}
