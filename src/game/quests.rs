//! Quest log (session 11).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable identifier.
    pub id: String,
    /// Text shown in the log.
    pub name: String,
    /// Whether it has been done.
    pub completed: bool,
}

impl Quest {
    /// Create an open quest.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            completed: false,
        }
    }
}

/// Quests in insertion order with an id index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestLog {
    quests: Vec<Quest>,
    index: HashMap<String, usize>,
}

impl QuestLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four dungeon quests.
    #[must_use]
    pub fn standard() -> Self {
        let mut log = Self::new();
        log.add(Quest::new("goblin", "Defeat the Goblin Scout"));
        log.add(Quest::new("skeleton", "Defeat the Skeleton Warrior"));
        log.add(Quest::new("treasure", "Find the Magic Amulet"));
        log.add(Quest::new("dragon", "Slay the Ancient Dragon"));
        log
    }

    /// Add a quest. A quest with an existing id replaces the old one.
    pub fn add(&mut self, quest: Quest) {
        if let Some(&i) = self.index.get(&quest.id) {
            self.quests[i] = quest;
        } else {
            self.index.insert(quest.id.clone(), self.quests.len());
            self.quests.push(quest);
        }
    }

    /// Get a quest by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.index.get(id).map(|&i| &self.quests[i])
    }

    /// Whether a quest is done. Unknown ids are not.
    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.get(id).is_some_and(|q| q.completed)
    }

    /// Mark a quest complete.
    ///
    /// Returns the quest only if this call changed it.
    pub fn complete(&mut self, id: &str) -> Option<&Quest> {
        let &i = self.index.get(id)?;
        let quest = &mut self.quests[i];
        if quest.completed {
            return None;
        }
        quest.completed = true;
        Some(quest)
    }

    /// Open quests in order.
    pub fn active(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| !q.completed)
    }

    /// Finished quests in order.
    pub fn completed(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.completed)
    }

    /// Number of finished quests.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    /// Total quests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Whether there are no quests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Ids of finished quests, for save files.
    #[must_use]
    pub fn completed_ids(&self) -> Vec<String> {
        self.completed().map(|q| q.id.clone()).collect()
    }
}

/// Quest completed by defeating the named enemy.
#[must_use]
pub fn quest_for_enemy(name: &str) -> Option<&'static str> {
    match name {
        "Goblin Scout" => Some("goblin"),
        "Skeleton Warrior" => Some("skeleton"),
        "Ancient Dragon" => Some("dragon"),
        _ => None,
    }
}

/// Quest completed by picking up the named item.
#[must_use]
pub fn quest_for_item(name: &str) -> Option<&'static str> {
    (name == "Magic Amulet").then_some("treasure")
}
