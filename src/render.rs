//! Text rendering for the game screens.
//!
//! Everything here returns a `String`; the CLI decides where it goes.

// Allow format! with push_str for readability - the allocation overhead is negligible for text rendering
#![allow(clippy::format_push_string)]

use crate::display::{bar, field};
use crate::game::{Inventory, Player, QuestLog, Room};
#[cfg(feature = "spells")]
use crate::game::spells::SPELLBOOK;
use crate::sessions;

/// Width of the stat-sheet health bar.
pub const STAT_BAR_WIDTH: usize = 20;

const RULE: &str = "═══════════════════════════════════";

fn boxed(output: &mut String, title: &str) {
    output.push_str("╔════════════════════════════════════════╗\n");
    output.push_str(&format!("║{title:<40}║\n"));
    output.push_str("╚════════════════════════════════════════╝\n");
}

/// Title screen, session list, intro and command help.
#[must_use]
pub fn banner(player_name: &str) -> String {
    let mut output = String::from("\n");
    boxed(&mut output, "     QUEST: DUNGEON CRAWLER");
    output.push('\n');
    output.push_str(&session_report());
    output.push_str(&format!("You are {player_name}, a brave adventurer.\n"));
    output.push_str("A dark dungeon awaits. Treasure and danger lie within!\n\n");
    output.push_str(&help());
    output
}

/// Which sessions are integrated.
#[must_use]
pub fn session_report() -> String {
    let mut output = String::from("📚 Sessions integrated: ");
    let names: Vec<String> = sessions::available()
        .map(|s| format!("{:02}", s.number))
        .collect();
    if names.is_empty() {
        output.push_str("None (using fallback code)\n");
    } else {
        output.push_str(&names.join(", "));
        output.push('\n');
    }
    for session in sessions::available() {
        output.push_str(&format!(
            "   ✅ Session {}: {} ({})\n",
            session.number, session.title, session.topic
        ));
    }
    output.push('\n');
    output
}

/// Command reference.
#[must_use]
pub fn help() -> String {
    let mut output = String::from("Commands:\n");
    output.push_str("  n/s/e/w - Move north/south/east/west\n");
    output.push_str("  look    - Examine current location (or l)\n");
    output.push_str("  fight   - Fight enemy in current location (or attack)\n");
    output.push_str("  flee    - Run from combat (or run)\n");
    output.push_str("  loot    - Take treasure from current location (or take)\n");
    output.push_str("  stats   - View your character\n");
    output.push_str("  inv     - View inventory (or i)\n");
    if cfg!(feature = "quests") {
        output.push_str("  quests  - View quests\n");
    }
    #[cfg(feature = "spells")]
    {
        let names: Vec<_> = SPELLBOOK.iter().map(|s| s.name).collect();
        output.push_str(&format!("  cast X  - Cast a spell ({})\n", names.join(", ")));
    }
    output.push_str("  save    - Save game\n");
    output.push_str("  load    - Load game\n");
    output.push_str("  help    - Show this list (or ?)\n");
    output.push_str("  quit    - Exit game (or exit)\n");
    output
}

/// Describe a room: enemy, treasure and exits.
#[must_use]
pub fn location(room: &Room) -> String {
    let mut output = format!("\n{RULE}\n{}\n{RULE}\n{}\n", room.name, room.description);

    if let Some(enemy) = room.living_enemy() {
        output.push_str(&format!("\n⚠️  {} blocks your path!\n", enemy.name()));
        output.push_str(&format!("   Type: {}\n", enemy.kind()));
        output.push_str(&format!("   HP: {}/{}\n", enemy.health(), enemy.max_health()));
    }

    if !room.treasure.is_empty() {
        output.push_str("\n✨ You see treasure here:\n");
        for item in &room.treasure {
            output.push_str(&format!("   - {} ({} gold)\n", item.name, item.value));
        }
    }

    let exits: Vec<_> = room.exits.keys().map(|d| d.name()).collect();
    output.push_str(&format!("\nExits: {}\n", exits.join(" ")));
    output
}

/// Character sheet.
///
/// `weapon_bonus` is the equipped weapon's damage, if any.
#[must_use]
pub fn stats(player: &Player, weapon_bonus: Option<u32>, location: &str) -> String {
    let mut output = String::from("\n");
    boxed(&mut output, "          CHARACTER STATS");
    output.push_str(&field("Name", &player.name));
    output.push_str(&field("Class", player.class));
    output.push_str(&field("Level", player.level));
    output.push_str(&field(
        "Health",
        format!("{}/{}", player.health, player.max_health),
    ));
    let attack = match weapon_bonus {
        Some(bonus) => format!("{} + {bonus} (weapon)", player.attack),
        None => player.attack.to_string(),
    };
    output.push_str(&field("Attack", attack));
    output.push_str(&field("Gold", player.gold));
    if cfg!(feature = "spells") {
        output.push_str(&field("Mana", format!("{}/{}", player.mana, player.max_mana)));
    }
    output.push_str(&field("Location", location));
    output.push_str(&field(
        "HP",
        bar(
            i64::from(player.health),
            i64::from(player.max_health),
            STAT_BAR_WIDTH,
        ),
    ));
    output
}

/// Inventory listing.
#[must_use]
pub fn inventory(inventory: &Inventory) -> String {
    let mut output = match inventory.capacity() {
        Some(capacity) => format!("\n🎒 Inventory ({}/{capacity} items):\n", inventory.len()),
        None => format!("\n🎒 Inventory ({} items):\n", inventory.len()),
    };
    if inventory.is_empty() {
        output.push_str("   (empty)\n");
        return output;
    }
    for (i, item) in inventory.iter().enumerate() {
        if cfg!(feature = "inventory") {
            output.push_str(&format!(
                "   {}. {} ({} gold) [{}]\n",
                i + 1,
                item.name,
                item.value,
                item.rarity()
            ));
        } else {
            output.push_str(&format!("   {}. {} ({} gold)\n", i + 1, item.name, item.value));
        }
    }
    if cfg!(feature = "inventory") {
        output.push_str(&format!("   Total value: {} gold\n", inventory.total_value()));
    }
    output
}

/// Quest log.
#[must_use]
pub fn quests(log: &QuestLog) -> String {
    let mut output = format!("\n📜 Quest Log:\n{RULE}\n");

    let mut active = log.active().peekable();
    if active.peek().is_some() {
        output.push_str("\n🔸 Active Quests:\n");
        for quest in active {
            output.push_str(&format!("   [ ] {}\n", quest.name));
        }
    }

    let mut completed = log.completed().peekable();
    if completed.peek().is_some() {
        output.push_str("\n✅ Completed Quests:\n");
        for quest in completed {
            output.push_str(&format!("   [✓] {}\n", quest.name));
        }
    }

    output.push_str(&format!(
        "\nProgress: {}/{} quests completed\n",
        log.completed_count(),
        log.len()
    ));
    output
}

/// Victory screen, followed by the caller's final stats.
#[must_use]
pub fn victory(boss_name: &str) -> String {
    let mut output = String::from("\n");
    boxed(&mut output, "          VICTORY!");
    output.push_str(&format!("You have defeated the {boss_name}!\n"));
    output.push_str("The dungeon is cleared. You are a true hero!\n\n");
    output.push_str("Final Stats:\n");
    output
}

/// Game-over screen.
#[must_use]
pub fn game_over() -> String {
    let mut output = String::from("\n");
    boxed(&mut output, "          GAME OVER");
    output.push_str("You have fallen in the dungeon...\n");
    output.push_str("Better luck next time!\n");
    output
}

/// Parting message.
#[must_use]
pub fn farewell() -> String {
    "\nThanks for playing Quest!\nKeep learning and building! 🚀\n".to_string()
}
