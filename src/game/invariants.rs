//! Game invariants - checks that detect engine bugs.
//!
//! No sequence of commands should ever trigger these. The fuzz target and
//! the property tests run them after every command.

use crate::game::{GameEngine, GameStatus};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

/// Check all game invariants.
///
/// Returns the violations found, or an empty list if everything holds.
#[must_use]
pub fn check_invariants(engine: &GameEngine) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut fail = |message: String| violations.push(InvariantViolation { message });

    let player = engine.player();
    if player.health > player.max_health {
        fail(format!(
            "player health {} > max {}",
            player.health, player.max_health
        ));
    }
    if player.mana > player.max_mana {
        fail(format!("player mana {} > max {}", player.mana, player.max_mana));
    }
    let finished = engine.boss_defeated() || !player.is_alive();
    if engine.status() != GameStatus::Quit && engine.status().is_over() != finished {
        fail(format!(
            "status {:?} disagrees with boss_defeated={} alive={}",
            engine.status(),
            engine.boss_defeated(),
            player.is_alive()
        ));
    }

    if engine.dungeon().room(engine.current_room()).is_none() {
        fail(format!("current room {} outside dungeon", engine.current_room()));
    }

    let inventory = engine.inventory();
    if let Some(capacity) = inventory.capacity()
        && inventory.len() > capacity
    {
        fail(format!(
            "inventory holds {} items, capacity {capacity}",
            inventory.len()
        ));
    }

    for room in engine.dungeon().rooms() {
        if let Some(enemy) = room.enemy.as_deref()
            && enemy.health() > enemy.max_health()
        {
            fail(format!(
                "{} health {} > max {}",
                enemy.name(),
                enemy.health(),
                enemy.max_health()
            ));
        }
    }

    violations
}
