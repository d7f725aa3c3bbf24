//! Which course sessions are compiled into this build.

/// A course session that contributes an optional subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Session number.
    pub number: u8,
    /// Cargo feature that enables it.
    pub feature: &'static str,
    /// Subsystem it provides.
    pub title: &'static str,
    /// Concept it teaches.
    pub topic: &'static str,
    /// Whether it is compiled in.
    pub enabled: bool,
}

/// Every optional session, in course order.
pub const SESSIONS: [Session; 6] = [
    Session {
        number: 2,
        feature: "inventory",
        title: "Inventory system",
        topic: "dynamic memory",
        enabled: cfg!(feature = "inventory"),
    },
    Session {
        number: 3,
        feature: "save-state",
        title: "Save/Load system",
        topic: "file I/O",
        enabled: cfg!(feature = "save-state"),
    },
    Session {
        number: 4,
        feature: "weapons",
        title: "Weapon system",
        topic: "smart pointers",
        enabled: cfg!(feature = "weapons"),
    },
    Session {
        number: 5,
        feature: "spells",
        title: "Spell system",
        topic: "classes",
        enabled: cfg!(feature = "spells"),
    },
    Session {
        number: 8,
        feature: "polymorphic-combat",
        title: "Combat system",
        topic: "polymorphism",
        enabled: cfg!(feature = "polymorphic-combat"),
    },
    Session {
        number: 11,
        feature: "quests",
        title: "Quest system",
        topic: "containers",
        enabled: cfg!(feature = "quests"),
    },
];

/// Sessions compiled into this build.
pub fn available() -> impl Iterator<Item = &'static Session> {
    SESSIONS.iter().filter(|s| s.enabled)
}
