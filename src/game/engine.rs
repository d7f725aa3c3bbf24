//! The game loop's rules: one command in, one screen of text out.
//!
//! The engine owns every piece of mutable game state. Optional sessions only
//! change which branches run; the fields exist in every build so a save file
//! has the same shape regardless of features.

// Allow format! with push_str for readability - the allocation overhead is negligible for text rendering
#![allow(clippy::format_push_string)]

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::game::quests::{quest_for_enemy, quest_for_item};
use crate::game::spells::{self, MANA_PER_MOVE};
use crate::game::{
    CharacterClass, Command, CommandError, Direction, Dungeon, ENTRANCE, Inventory, Item, Player, QuestLog,
    Room, RoomId, SpellType, Weapon,
};
use crate::render;
use crate::rng::Rng;
use crate::save::{DEFAULT_SAVE_PATH, FlatSave, RoomState, SNAPSHOT_VERSION, SaveError, Snapshot};

/// Health lost when running from an enemy.
pub const FLEE_PENALTY: u32 = 5;

/// Exclusive upper bound of the random bonus added to each player attack.
pub const ATTACK_ROLL: u32 = 5;

/// Name used when none is given.
pub const DEFAULT_PLAYER_NAME: &str = "Hero";

/// Settings for a new game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Player name. Surrounding whitespace is dropped and inner runs become
    /// one space; a blank name falls back to [`DEFAULT_PLAYER_NAME`].
    pub player_name: String,
    /// Player class.
    pub class: CharacterClass,
    /// RNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Where `save` and `load` go.
    pub save_path: PathBuf,
    /// Inventory slots; `None` is unbounded.
    pub inventory_capacity: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            class: CharacterClass::default(),
            seed: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            inventory_capacity: Inventory::session_capacity(),
        }
    }
}

/// Where the game stands after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Keep reading commands.
    Playing,
    /// The boss is dead.
    Victory,
    /// The player is dead.
    Defeat,
    /// The player asked to stop.
    Quit,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Self::Playing
    }
}

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Text to show the player.
    pub text: String,
    /// Status after the command.
    pub status: GameStatus,
}

/// A running game.
#[derive(Debug)]
pub struct GameEngine {
    player: Player,
    dungeon: Dungeon,
    current: RoomId,
    inventory: Inventory,
    weapon: Option<Weapon>,
    buff: u32,
    quests: QuestLog,
    boss_defeated: bool,
    rng: Rng,
    turns: u32,
    status: GameStatus,
    save_path: PathBuf,
}

impl GameEngine {
    /// Start a new game at the dungeon entrance.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(Rng::from_entropy, Rng::new);
        let name = player_name(&config.player_name);
        info!(
            player = %name,
            class = %config.class,
            seed = ?config.seed,
            "new game"
        );
        Self {
            player: Player::new(&name, config.class),
            dungeon: Dungeon::standard(),
            current: ENTRANCE,
            inventory: Inventory::new(config.inventory_capacity),
            weapon: None,
            buff: 0,
            quests: new_quest_log(),
            boss_defeated: false,
            rng,
            turns: 0,
            status: GameStatus::Playing,
            save_path: config.save_path,
        }
    }

    /// Opening screen followed by the entrance description.
    pub fn banner(&mut self) -> String {
        let mut text = render::banner(&self.player.name);
        text.push_str(&self.describe_current());
        text
    }

    /// Parse and run one line of input.
    ///
    /// Input that is not a command leaves the game untouched and reports the
    /// parse error.
    pub fn execute_line(&mut self, line: &str) -> Response {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                debug!(input = line, "unrecognised input");
                Response {
                    text: format!("{err}\n"),
                    status: self.status,
                }
            }
        }
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Response {
        if self.status.is_over() {
            return Response {
                text: "The adventure is over.\n".to_string(),
                status: self.status,
            };
        }
        if !command.is_available() {
            return Response {
                text: format!("{}\n", CommandError::Unknown(String::new())),
                status: self.status,
            };
        }

        self.turns = self.turns.saturating_add(1);
        debug!(turn = self.turns, ?command, "command");

        let mut text = match command {
            Command::Move(direction) => self.move_to(direction),
            Command::Look => self.describe_current(),
            Command::Fight => self.fight(),
            Command::Flee => self.flee(),
            Command::Loot => self.loot(),
            Command::Stats => self.stats(),
            Command::Inventory => render::inventory(&self.inventory),
            Command::Quests => render::quests(&self.quests),
            Command::Cast(name) => self.cast(&name),
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::Help => render::help(),
            Command::Quit => {
                self.status = GameStatus::Quit;
                String::new()
            }
        };

        self.settle(&mut text);
        Response {
            text,
            status: self.status,
        }
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The dungeon and everything in it.
    #[must_use]
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// Id of the room the player is in.
    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    /// The room the player is in.
    #[must_use]
    pub fn room(&self) -> &Room {
        self.current_room_ref()
    }

    /// Carried items.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Equipped weapon.
    #[must_use]
    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    /// Attack bonus waiting for the next fight.
    #[must_use]
    pub fn buff(&self) -> u32 {
        self.buff
    }

    /// Quest log. Empty without the `quests` session.
    #[must_use]
    pub fn quests(&self) -> &QuestLog {
        &self.quests
    }

    /// Whether the boss is dead.
    #[must_use]
    pub fn boss_defeated(&self) -> bool {
        self.boss_defeated
    }

    /// Commands executed so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Total damage of one player attack before the random roll.
    #[must_use]
    pub fn attack_power(&self) -> u32 {
        self.player
            .attack
            .saturating_add(self.weapon.as_ref().map_or(0, |w| w.damage))
            .saturating_add(self.buff)
    }

    /// Capture the whole game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            player: self.player.clone(),
            room: self.current,
            boss_defeated: self.boss_defeated,
            inventory: self.inventory.clone(),
            weapon: self.weapon.clone(),
            buff: self.buff,
            completed_quests: self.quests.completed_ids(),
            rooms: self
                .dungeon
                .rooms()
                .map(|room| RoomState {
                    enemy: room.enemy.as_ref().map(|e| e.state()),
                    treasure: room.treasure.clone(),
                    visited: room.visited,
                })
                .collect(),
            rng: self.rng,
            turns: self.turns,
        }
    }

    /// Replace the game with a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot fails [`Snapshot::validate`] or was
    /// taken of a differently shaped dungeon. The game is unchanged on error.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), SaveError> {
        snapshot.validate()?;
        if snapshot.rooms.len() != self.dungeon.len() {
            return Err(SaveError::Corrupt(format!(
                "snapshot has {} rooms, dungeon has {}",
                snapshot.rooms.len(),
                self.dungeon.len()
            )));
        }
        if snapshot.room >= self.dungeon.len() {
            return Err(SaveError::Corrupt(format!("room {} does not exist", snapshot.room)));
        }

        for (room, state) in self.dungeon.rooms_mut().zip(snapshot.rooms) {
            if let (Some(enemy), Some(enemy_state)) = (room.enemy.as_mut(), state.enemy) {
                enemy.restore(enemy_state);
            }
            room.treasure = state.treasure;
            room.visited = state.visited;
        }

        let mut quests = new_quest_log();
        for id in &snapshot.completed_quests {
            quests.complete(id);
        }

        self.player = snapshot.player;
        self.current = snapshot.room;
        self.boss_defeated = snapshot.boss_defeated;
        self.inventory = snapshot.inventory;
        self.weapon = snapshot.weapon;
        self.buff = snapshot.buff;
        self.quests = quests;
        self.rng = snapshot.rng;
        self.turns = snapshot.turns;
        Ok(())
    }

    fn current_room_ref(&self) -> &Room {
        // `current` is only ever set to ids checked against the dungeon
        match self.dungeon.room(self.current) {
            Some(room) => room,
            None => unreachable!("current room {} outside dungeon", self.current),
        }
    }

    fn describe_current(&mut self) -> String {
        match self.dungeon.room_mut(self.current) {
            Some(room) => {
                room.visited = true;
                render::location(room)
            }
            None => String::new(),
        }
    }

    fn settle(&mut self, text: &mut String) {
        if self.status.is_over() {
            return;
        }
        if self.boss_defeated {
            self.status = GameStatus::Victory;
            let boss = self
                .dungeon
                .rooms()
                .filter_map(|r| r.enemy.as_deref())
                .find(|e| e.is_boss())
                .map_or_else(|| "boss".to_string(), |e| e.name().to_string());
            info!(turns = self.turns, gold = self.player.gold, "victory");
            text.push_str(&render::victory(&boss));
            text.push_str(&self.stats());
        } else if !self.player.is_alive() {
            self.status = GameStatus::Defeat;
            info!(turns = self.turns, room = self.current, "defeat");
            text.push_str(&render::game_over());
        }
    }

    fn move_to(&mut self, direction: Direction) -> String {
        if let Some(enemy) = self.current_room_ref().living_enemy() {
            return format!(
                "You cannot leave while {} blocks your path!\nFight or flee!\n",
                enemy.name()
            );
        }
        let Some(to) = self.dungeon.neighbor(self.current, direction) else {
            return "You cannot go that way.\n".to_string();
        };

        debug!(from = self.current, to, %direction, "move");
        self.current = to;
        if cfg!(feature = "spells") {
            self.player.restore_mana(MANA_PER_MOVE);
        }
        let mut text = format!("You move {direction}...\n");
        text.push_str(&self.describe_current());
        text
    }

    fn fight(&mut self) -> String {
        let attack = self.attack_power();
        let Some(room) = self.dungeon.room_mut(self.current) else {
            return String::new();
        };
        let dropped_treasure = !room.treasure.is_empty();
        let Some(enemy) = room.living_enemy_mut() else {
            return "There is nothing to fight here.\n".to_string();
        };

        let name = enemy.name().to_string();
        let is_boss = enemy.is_boss();
        let mut text = format!("\n⚔️  COMBAT!\nYou vs {name} ({})\n\n", enemy.kind());
        info!(enemy = %name, "fight");

        loop {
            let dealt = enemy.take_damage(attack.saturating_add(self.rng.roll(ATTACK_ROLL)));
            text.push_str(&format!("You attack for {dealt} damage!\n"));
            text.push_str(&format!(
                "{name} HP: {}/{}\n",
                enemy.health(),
                enemy.max_health()
            ));
            if !enemy.is_alive() {
                break;
            }

            let strike = enemy.strike(&mut self.rng);
            let taken = self.player.take_damage(strike.damage);
            text.push_str(&format!("{name} {} for {taken} damage!\n", strike.verb));
            text.push_str(&format!(
                "Your HP: {}/{}\n\n",
                self.player.health, self.player.max_health
            ));
            if !self.player.is_alive() {
                break;
            }
        }

        self.buff = 0;
        if self.player.is_alive() {
            self.defeated(&name, is_boss, dropped_treasure, &mut text);
        }
        text
    }

    fn defeated(&mut self, name: &str, is_boss: bool, dropped_treasure: bool, text: &mut String) {
        info!(enemy = name, boss = is_boss, "enemy defeated");
        text.push_str(&format!("\n🎉 Victory! {name} defeated!\n"));
        if let Some(id) = quest_for_enemy(name) {
            self.complete_quest(id, text);
        }
        if is_boss {
            self.boss_defeated = true;
        }
        if dropped_treasure {
            text.push_str(&format!("\n💎 {name} dropped treasure!\n"));
        }
    }

    fn complete_quest(&mut self, id: &str, text: &mut String) {
        if let Some(quest) = self.quests.complete(id) {
            info!(quest = id, "quest completed");
            text.push_str(&format!("\n🎯 Quest Completed: {}\n", quest.name));
        }
    }

    fn flee(&mut self) -> String {
        let Some(enemy) = self.current_room_ref().living_enemy() else {
            return "There is nothing to flee from.\n".to_string();
        };
        let name = enemy.name().to_string();

        let taken = self.player.take_damage(FLEE_PENALTY);
        let mut text = format!("You flee from {name}!\n");
        text.push_str(&format!(
            "{name} strikes you as you run! (-{taken} HP)\nYour HP: {}/{}\n",
            self.player.health, self.player.max_health
        ));
        debug!(enemy = %name, "flee");

        self.current = ENTRANCE;
        text.push_str("You retreat to the entrance.\n");
        text.push_str(&self.describe_current());
        text
    }

    fn loot(&mut self) -> String {
        let treasure = match self.dungeon.room_mut(self.current) {
            Some(room) if !room.treasure.is_empty() => std::mem::take(&mut room.treasure),
            _ => return "There is no treasure here.\n".to_string(),
        };

        let mut text = String::from("\n💰 You collect:\n");
        let mut left_behind = Vec::new();
        for item in treasure {
            if !left_behind.is_empty() {
                left_behind.push(item);
                continue;
            }
            if let Err(full) = self.inventory.add(Item::new(&item.name, item.value)) {
                warn!(capacity = full.capacity, "inventory full");
                left_behind.push(item);
                continue;
            }

            text.push_str(&format!("   - {} ({} gold)\n", item.name, item.value));
            self.player.add_gold(item.value);
            if cfg!(feature = "weapons")
                && let Some(weapon) = Weapon::from_loot(&item.name, item.value)
            {
                text.push_str(&format!(
                    "   ⚔️  Equipped {} (+{} damage)\n",
                    weapon.name, weapon.damage
                ));
                self.weapon = Some(weapon);
            }
            if let Some(id) = quest_for_item(&item.name) {
                self.complete_quest(id, &mut text);
            }
        }

        if !left_behind.is_empty() {
            let names: Vec<_> = left_behind.iter().map(|t| t.name.as_str()).collect();
            text.push_str(&format!(
                "   Your pack is full! Left behind: {}\n",
                names.join(", ")
            ));
            if let Some(room) = self.dungeon.room_mut(self.current) {
                room.treasure = left_behind;
            }
        }
        text
    }

    fn stats(&self) -> String {
        render::stats(
            &self.player,
            self.weapon.as_ref().map(|w| w.damage),
            &self.current_room_ref().name,
        )
    }

    fn cast(&mut self, name: &str) -> String {
        let Some(spell) = spells::find(name) else {
            return format!("You don't know a spell called '{name}'.\n");
        };
        match spell.kind {
            SpellType::Damage | SpellType::Debuff
                if self.current_room_ref().living_enemy().is_none() =>
            {
                return "There is nothing to target here.\n".to_string();
            }
            SpellType::Healing if self.player.health == self.player.max_health => {
                return "You are already at full health.\n".to_string();
            }
            SpellType::Buff if self.buff > 0 => {
                return format!("{} is already active.\n", spell.name);
            }
            _ => {}
        }
        if !self.player.spend_mana(spell.cost) {
            return format!(
                "Not enough mana to cast {}. ({}/{} needed)\n",
                spell.name, self.player.mana, spell.cost
            );
        }
        debug!(spell = spell.name, "cast");

        match spell.kind {
            SpellType::Damage | SpellType::Debuff => {
                let Some(room) = self.dungeon.room_mut(self.current) else {
                    return String::new();
                };
                let dropped_treasure = !room.treasure.is_empty();
                let Some(enemy) = room.living_enemy_mut() else {
                    return String::new();
                };
                let target = enemy.name().to_string();

                if spell.kind == SpellType::Debuff {
                    enemy.weaken(spell.power);
                    return format!(
                        "✨ You cast {}! {target} is weakened (-{} attack).\n",
                        spell.name, spell.power
                    );
                }

                let dealt = enemy.take_damage(spell.power);
                let mut text = format!(
                    "✨ You cast {}! {target} takes {dealt} damage.\n{target} HP: {}/{}\n",
                    spell.name,
                    enemy.health(),
                    enemy.max_health()
                );
                if !enemy.is_alive() {
                    let is_boss = enemy.is_boss();
                    self.defeated(&target, is_boss, dropped_treasure, &mut text);
                }
                text
            }
            SpellType::Healing => {
                let healed = self.player.heal(spell.power);
                format!(
                    "✨ You cast {} and recover {healed} HP. ({}/{})\n",
                    spell.name, self.player.health, self.player.max_health
                )
            }
            SpellType::Buff => {
                self.buff = spell.power;
                format!(
                    "✨ You cast {}! +{} attack for your next fight.\n",
                    spell.name, spell.power
                )
            }
        }
    }

    fn save(&self) -> String {
        let mut text = String::from("💾 Saving game...\n");
        let result = if cfg!(feature = "save-state") {
            self.snapshot().write(&self.save_path)
        } else {
            self.flat_save().write(&self.save_path)
        };
        match result {
            Ok(()) => {
                info!(path = %self.save_path.display(), "game saved");
                text.push_str("   ✅ Game saved successfully!\n");
            }
            Err(err) => {
                warn!(error = %err, "save failed");
                text.push_str(&format!("   ❌ Error: Could not save game! ({err})\n"));
            }
        }
        text
    }

    fn load(&mut self) -> String {
        let mut text = String::from("📂 Loading game...\n");
        let result = if cfg!(feature = "save-state") {
            Snapshot::read(&self.save_path).and_then(|snapshot| self.restore(snapshot))
        } else {
            FlatSave::read(&self.save_path).and_then(|save| self.apply_flat(save))
        };
        match result {
            Ok(()) => {
                info!(path = %self.save_path.display(), "game loaded");
                text.push_str("   ✅ Game loaded successfully!\n");
                text.push_str(&format!(
                    "   Loaded: {}, Level {}, {} gold\n",
                    self.player.name, self.player.level, self.player.gold
                ));
                text.push_str(&self.describe_current());
            }
            Err(SaveError::Missing(_)) => text.push_str("   ❌ No save file found!\n"),
            Err(err) => {
                warn!(error = %err, "load failed");
                text.push_str(&format!("   ❌ Could not load game: {err}\n"));
            }
        }
        text
    }

    fn flat_save(&self) -> FlatSave {
        FlatSave {
            name: self.player.name.clone(),
            health: self.player.health,
            max_health: self.player.max_health,
            attack: self.player.attack,
            gold: self.player.gold,
            level: self.player.level,
            room: self.current,
            boss_defeated: self.boss_defeated,
        }
    }

    fn apply_flat(&mut self, save: FlatSave) -> Result<(), SaveError> {
        if save.room >= self.dungeon.len() {
            return Err(SaveError::Corrupt(format!("room {} does not exist", save.room)));
        }
        self.player.name = save.name;
        self.player.health = save.health;
        self.player.max_health = save.max_health;
        self.player.attack = save.attack;
        self.player.gold = save.gold;
        self.player.level = save.level;
        self.current = save.room;
        self.boss_defeated = save.boss_defeated;
        Ok(())
    }
}

/// Collapse runs of whitespace in a player name; a blank name becomes
/// [`DEFAULT_PLAYER_NAME`].
fn player_name(raw: &str) -> String {
    let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        name
    }
}

fn new_quest_log() -> QuestLog {
    if cfg!(feature = "quests") {
        QuestLog::standard()
    } else {
        QuestLog::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Entity;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        })
    }

    fn engine_saving_to(path: PathBuf) -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(42),
            save_path: path,
            ..GameConfig::default()
        })
    }

    fn run(engine: &mut GameEngine, line: &str) -> Response {
        engine.execute_line(line)
    }

    fn enemy_in(engine: &GameEngine, room: RoomId) -> &dyn Entity {
        engine.dungeon().room(room).unwrap().enemy.as_deref().unwrap()
    }

    #[test]
    fn test_banner_describes_entrance() {
        let mut engine = engine();
        let text = engine.banner();
        assert!(text.contains("QUEST: DUNGEON CRAWLER"));
        assert!(text.contains("Dungeon Entrance"));
        assert!(engine.room().visited);
    }

    #[test]
    fn test_move_and_blocked_exit() {
        let mut engine = engine();
        let response = run(&mut engine, "s");
        assert_eq!(response.text, "You cannot go that way.\n");
        assert_eq!(engine.current_room(), ENTRANCE);

        let response = run(&mut engine, "north");
        assert!(response.text.starts_with("You move north...\n"));
        assert!(response.text.contains("Grand Hall"));
        assert_eq!(engine.current_room(), 1);
        assert_eq!(response.status, GameStatus::Playing);
    }

    #[test]
    fn test_enemy_blocks_movement() {
        let mut engine = engine();
        run(&mut engine, "n");
        let response = run(&mut engine, "e");
        assert_eq!(
            response.text,
            "You cannot leave while Goblin Scout blocks your path!\nFight or flee!\n"
        );
        assert_eq!(engine.current_room(), 1);
    }

    #[test]
    fn test_fight_until_enemy_falls() {
        let mut engine = engine();
        run(&mut engine, "n");
        let response = run(&mut engine, "fight");
        assert!(response.text.contains("COMBAT!"));
        assert!(response.text.contains("🎉 Victory! Goblin Scout defeated!"));
        assert!(response.text.contains("💎 Goblin Scout dropped treasure!"));
        assert!(!enemy_in(&engine, 1).is_alive());
        assert!(engine.player().health < engine.player().max_health);

        let response = run(&mut engine, "fight");
        assert_eq!(response.text, "There is nothing to fight here.\n");
    }

    #[test]
    fn test_fight_with_nothing_here() {
        let mut engine = engine();
        assert_eq!(run(&mut engine, "fight").text, "There is nothing to fight here.\n");
    }

    #[test]
    fn test_defeating_goblin_completes_quest() {
        let mut engine = engine();
        run(&mut engine, "n");
        let text = run(&mut engine, "fight").text;
        if cfg!(feature = "quests") {
            assert!(text.contains("🎯 Quest Completed: Defeat the Goblin Scout"));
            assert!(engine.quests().is_completed("goblin"));
        } else {
            assert!(engine.quests().is_empty());
        }
    }

    #[test]
    fn test_flee_costs_health_and_returns_to_entrance() {
        let mut engine = engine();
        assert_eq!(run(&mut engine, "flee").text, "There is nothing to flee from.\n");

        run(&mut engine, "n");
        let response = run(&mut engine, "flee");
        assert!(response.text.contains("You flee from Goblin Scout!"));
        assert_eq!(engine.current_room(), ENTRANCE);
        assert_eq!(engine.player().health, 100 - FLEE_PENALTY);
    }

    #[test]
    fn test_loot_collects_gold_and_items() {
        let mut engine = engine();
        run(&mut engine, "n");
        run(&mut engine, "fight");
        let text = run(&mut engine, "loot").text;
        assert!(text.contains("   - Rusty Dagger (10 gold)"));
        assert_eq!(engine.player().gold, 10);
        assert!(engine.inventory().contains("Rusty Dagger"));
        assert!(engine.room().treasure.is_empty());

        assert_eq!(run(&mut engine, "loot").text, "There is no treasure here.\n");
    }

    #[test]
    fn test_looting_weapon_equips_it() {
        let mut engine = engine();
        run(&mut engine, "n");
        run(&mut engine, "fight");
        let text = run(&mut engine, "loot").text;
        if cfg!(feature = "weapons") {
            assert!(text.contains("⚔️  Equipped Rusty Dagger (+1 damage)"));
            assert_eq!(engine.weapon().map(|w| w.damage), Some(1));
            assert_eq!(engine.attack_power(), 16);
        } else {
            assert!(engine.weapon().is_none());
        }
    }

    #[test]
    fn test_full_pack_leaves_treasure_behind() {
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(1),
            inventory_capacity: Some(0),
            ..GameConfig::default()
        });
        run(&mut engine, "n");
        run(&mut engine, "fight");
        let text = run(&mut engine, "loot").text;
        assert!(text.contains("Your pack is full! Left behind: Rusty Dagger"));
        assert_eq!(engine.player().gold, 0);
        assert_eq!(engine.room().treasure.len(), 1);
    }

    #[test]
    fn test_unknown_input_is_not_a_turn() {
        let mut engine = engine();
        let response = run(&mut engine, "dance");
        assert_eq!(response.text, "Unknown command. Type 'look' for help.\n");
        assert_eq!(engine.turns(), 0);
    }

    #[test]
    fn test_quit() {
        let mut engine = engine();
        assert_eq!(run(&mut engine, "quit").status, GameStatus::Quit);
        let response = run(&mut engine, "look");
        assert_eq!(response.text, "The adventure is over.\n");
        assert_eq!(response.status, GameStatus::Quit);
    }

    #[test]
    fn test_defeat_when_health_runs_out() {
        let mut engine = engine();
        engine.player.health = 1;
        run(&mut engine, "n");
        let response = run(&mut engine, "flee");
        assert_eq!(response.status, GameStatus::Defeat);
        assert!(response.text.contains("GAME OVER"));
    }

    #[test]
    fn test_boss_kill_is_victory() {
        let mut engine = engine();
        engine.player.attack = 500;
        for line in ["n", "fight", "n", "fight", "n", "n"] {
            run(&mut engine, line);
        }
        let response = run(&mut engine, "fight");
        assert_eq!(response.status, GameStatus::Victory);
        assert!(response.text.contains("You have defeated the Ancient Dragon!"));
        assert!(response.text.contains("CHARACTER STATS"));
        assert!(engine.boss_defeated());
    }

    #[test]
    fn test_stats_and_inventory_screens() {
        let mut engine = engine();
        assert!(run(&mut engine, "stats").text.contains("Location: Dungeon Entrance"));
        assert!(run(&mut engine, "inv").text.contains("(empty)"));
    }

    #[test]
    fn test_save_then_load_restores_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.txt");
        let mut engine = engine_saving_to(path.clone());
        run(&mut engine, "n");
        run(&mut engine, "fight");
        run(&mut engine, "loot");
        let saved_health = engine.player().health;
        let text = run(&mut engine, "save").text;
        assert!(text.contains("✅ Game saved successfully!"));

        let mut fresh = engine_saving_to(path);
        let text = run(&mut fresh, "load").text;
        assert!(text.contains("✅ Game loaded successfully!"));
        assert_eq!(fresh.current_room(), 1);
        assert_eq!(fresh.player().health, saved_health);
        assert_eq!(fresh.player().gold, 10);
        if cfg!(feature = "save-state") {
            assert!(fresh.inventory().contains("Rusty Dagger"));
            assert!(!enemy_in(&fresh, 1).is_alive());
            assert!(fresh.room().treasure.is_empty());
        }
    }

    #[test]
    fn test_load_without_save_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_saving_to(dir.path().join("missing.txt"));
        run(&mut engine, "n");
        let text = run(&mut engine, "load").text;
        assert!(text.contains("❌ No save file found!"));
        assert_eq!(engine.current_room(), 1);
    }

    #[test]
    fn test_load_garbage_keeps_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.txt");
        std::fs::write(&path, "not a save").unwrap();
        let mut engine = engine_saving_to(path);
        let text = run(&mut engine, "load").text;
        assert!(text.contains("❌ Could not load game"));
        assert_eq!(engine.player().health, 100);
    }

    #[test]
    fn test_restore_rejects_wrong_room_count() {
        let mut engine = engine();
        let mut snapshot = engine.snapshot();
        snapshot.rooms.pop();
        assert!(matches!(engine.restore(snapshot), Err(SaveError::Corrupt(_))));
    }

    #[test]
    fn test_snapshot_restore_replays_rolls() {
        let mut engine = engine();
        run(&mut engine, "n");
        let snapshot = engine.snapshot();
        let first = run(&mut engine, "fight").text;

        engine.restore(snapshot).unwrap();
        let second = run(&mut engine, "fight").text;
        assert_eq!(first, second);
    }

    #[test]
    fn test_restore_rejects_out_of_range_attack() {
        let mut engine = engine();
        let mut snapshot = engine.snapshot();
        snapshot.player.attack = u32::MAX;
        assert!(matches!(engine.restore(snapshot), Err(SaveError::Corrupt(_))));
        assert_eq!(engine.player().attack, 15);
    }

    #[test]
    fn test_turn_counter_saturates() {
        let mut engine = engine();
        let mut snapshot = engine.snapshot();
        snapshot.turns = u32::MAX;
        engine.restore(snapshot).unwrap();
        run(&mut engine, "look");
        assert_eq!(engine.turns(), u32::MAX);
    }

    #[test]
    fn test_huge_attack_does_not_overflow() {
        let mut engine = engine();
        engine.player.attack = u32::MAX;
        engine.buff = u32::MAX;
        assert_eq!(engine.attack_power(), u32::MAX);
        run(&mut engine, "n");
        let text = run(&mut engine, "fight").text;
        assert!(text.contains("Victory! Goblin Scout defeated!"));
    }

    #[test]
    fn test_player_name_is_tidied() {
        let named = |name: &str| {
            GameEngine::new(GameConfig {
                player_name: name.to_string(),
                seed: Some(1),
                ..GameConfig::default()
            })
        };
        assert_eq!(named("  Sir   Robin ").player().name, "Sir Robin");
        assert_eq!(named("").player().name, DEFAULT_PLAYER_NAME);
        assert_eq!(named(" \n\t").player().name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_padded_name_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.txt");
        let mut engine = GameEngine::new(GameConfig {
            player_name: "  Bob ".to_string(),
            seed: Some(42),
            save_path: path.clone(),
            ..GameConfig::default()
        });
        assert!(run(&mut engine, "save").text.contains("✅ Game saved successfully!"));

        let mut fresh = GameEngine::new(GameConfig {
            player_name: "Someone Else".to_string(),
            seed: Some(42),
            save_path: path,
            ..GameConfig::default()
        });
        let text = run(&mut fresh, "load").text;
        assert!(text.contains("Loaded: Bob, Level 1"));
        assert_eq!(fresh.player().name, "Bob");
    }

    #[cfg(feature = "spells")]
    mod casting {
        use super::*;

        #[test]
        fn test_firebolt_needs_target() {
            let mut engine = engine();
            let mana = engine.player().mana;
            let text = run(&mut engine, "cast firebolt").text;
            assert_eq!(text, "There is nothing to target here.\n");
            assert_eq!(engine.player().mana, mana);
        }

        #[test]
        fn test_firebolt_damages_enemy() {
            let mut engine = engine();
            engine.player.mana = 60;
            engine.player.max_mana = 60;
            run(&mut engine, "n");
            let text = run(&mut engine, "cast Firebolt").text;
            assert!(text.contains("Goblin Scout takes"));
            assert!(engine.player().mana < 60);
            assert!(enemy_in(&engine, 1).health() < 30);
        }

        #[test]
        fn test_firebolt_kill_counts_as_defeat() {
            let mut engine = engine();
            engine.player.mana = 60;
            engine.player.max_mana = 60;
            run(&mut engine, "n");
            let mut text = run(&mut engine, "cast firebolt").text;
            if enemy_in(&engine, 1).is_alive() {
                text = run(&mut engine, "cast firebolt").text;
            }
            assert!(text.contains("Victory! Goblin Scout defeated!"));
            assert!(!enemy_in(&engine, 1).is_alive());
        }

        #[test]
        fn test_unknown_spell_and_low_mana() {
            let mut engine = engine();
            let text = run(&mut engine, "cast meteor").text;
            assert_eq!(text, "You don't know a spell called 'meteor'.\n");

            engine.player.mana = 0;
            let text = run(&mut engine, "cast battle cry").text;
            assert!(text.starts_with("Not enough mana to cast Battle Cry."));
            assert_eq!(engine.buff(), 0);
        }

        #[test]
        fn test_heal_and_full_health() {
            let mut engine = engine();
            let text = run(&mut engine, "cast heal").text;
            assert_eq!(text, "You are already at full health.\n");

            engine.player.health = 50;
            let mana = engine.player().mana;
            let text = run(&mut engine, "cast heal").text;
            assert!(text.contains("recover 25 HP"));
            assert_eq!(engine.player().health, 75);
            assert_eq!(engine.player().mana, mana - 10);
        }

        #[test]
        fn test_battle_cry_lasts_one_fight() {
            let mut engine = engine();
            run(&mut engine, "cast battle cry");
            assert_eq!(engine.buff(), 5);
            assert_eq!(engine.attack_power(), 20);
            run(&mut engine, "n");
            run(&mut engine, "fight");
            assert_eq!(engine.buff(), 0);
        }

        #[test]
        fn test_moving_regenerates_mana() {
            let mut engine = engine();
            engine.player.mana = 0;
            run(&mut engine, "n");
            assert_eq!(engine.player().mana, MANA_PER_MOVE);
        }

        #[test]
        fn test_battle_cry_does_not_stack() {
            let mut engine = engine();
            run(&mut engine, "cast battle cry");
            let mana = engine.player().mana;
            let text = run(&mut engine, "cast battle cry").text;
            assert_eq!(text, "Battle Cry is already active.\n");
            assert_eq!(engine.buff(), 5);
            assert_eq!(engine.player().mana, mana);
        }

        #[test]
        fn test_hex_needs_target() {
            let mut engine = engine();
            let mana = engine.player().mana;
            let text = run(&mut engine, "cast hex").text;
            assert_eq!(text, "There is nothing to target here.\n");
            assert_eq!(engine.player().mana, mana);
        }

        #[test]
        fn test_hex_weakens_later_strikes() {
            let mut plain = engine();
            run(&mut plain, "n");
            let plain_fight = run(&mut plain, "fight").text;

            let mut hexed = engine();
            run(&mut hexed, "n");
            let mana = hexed.player().mana;
            let text = run(&mut hexed, "cast hex").text;
            assert!(text.contains("Goblin Scout is weakened (-5 attack)"));
            assert_eq!(hexed.player().mana, mana - 12);
            let hexed_fight = run(&mut hexed, "fight").text;

            // Casting rolls nothing, so both fights see the same dice
            let strikes = hexed_fight.matches("Your HP:").count();
            assert!(strikes > 0);
            assert_eq!(strikes, plain_fight.matches("Your HP:").count());
            let spared = hexed.player().health - plain.player().health;
            assert_eq!(spared, 5 * u32::try_from(strikes).unwrap());
        }

        #[cfg(feature = "save-state")]
        #[test]
        fn test_weakness_survives_save_and_load() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("save.json");
            let mut engine = engine_saving_to(path.clone());
            run(&mut engine, "n");
            run(&mut engine, "cast hex");
            run(&mut engine, "save");

            let mut fresh = engine_saving_to(path);
            run(&mut fresh, "load");
            assert_eq!(enemy_in(&fresh, 1).state().weakness, 5);
        }

        #[test]
        fn test_spell_kill_of_boss_is_victory() {
            let mut engine = engine();
            engine.player.attack = 500;
            for line in ["n", "fight", "n", "fight", "n", "n"] {
                run(&mut engine, line);
            }
            assert_eq!(engine.current_room(), 6);
            if let Some(dragon) = engine
                .dungeon
                .room_mut(6)
                .and_then(|room| room.living_enemy_mut())
            {
                dragon.take_damage(140);
            }
            engine.player.mana = engine.player.max_mana;

            let response = run(&mut engine, "cast firebolt");
            assert_eq!(response.status, GameStatus::Victory);
            assert!(response.text.contains("Victory! Ancient Dragon defeated!"));
            assert!(response.text.contains("You have defeated the Ancient Dragon!"));
            assert!(engine.boss_defeated());
        }
    }

    #[cfg(not(feature = "spells"))]
    #[test]
    fn test_cast_unavailable_is_not_a_turn() {
        let mut engine = engine();
        let text = run(&mut engine, "cast heal").text;
        assert_eq!(text, "Unknown command. Type 'look' for help.\n");
        let response = engine.execute(Command::Cast("heal".to_string()));
        assert_eq!(response.text, "Unknown command. Type 'look' for help.\n");
        assert_eq!(engine.turns(), 0);
    }

    #[cfg(not(feature = "quests"))]
    #[test]
    fn test_quests_unavailable_is_not_a_turn() {
        let mut engine = engine();
        let text = run(&mut engine, "quests").text;
        assert_eq!(text, "Unknown command. Type 'look' for help.\n");
        engine.execute(Command::Quests);
        assert_eq!(engine.turns(), 0);
    }
}
