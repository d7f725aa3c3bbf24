#![no_main]

//! Save file parser fuzzer.
//!
//! Both formats must reject garbage with an error, never a panic, and any
//! snapshot that parses must restore into a fresh game without breaking it.

use libfuzzer_sys::fuzz_target;
use quest::game::{check_invariants, Command, GameConfig, GameEngine};
use quest::save::{FlatSave, Snapshot};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(save) = FlatSave::parse(text) {
        assert!(save.health <= save.max_health);
        assert_eq!(FlatSave::parse(&save.to_text()).ok(), Some(save));
    }

    if let Ok(snapshot) = Snapshot::from_json(text) {
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(0),
            ..GameConfig::default()
        });
        if engine.restore(snapshot).is_ok() {
            engine.execute(Command::Look);
            assert!(check_invariants(&engine).is_empty());
        }
    }
});
