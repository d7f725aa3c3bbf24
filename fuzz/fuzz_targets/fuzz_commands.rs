#![no_main]

//! Command sequence fuzzer.
//!
//! Feeds arbitrary input lines to a seeded game and checks the game
//! invariants after every command. Saving and loading are skipped so the
//! fuzzer never touches the filesystem.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quest::game::{check_invariants, Command, GameConfig, GameEngine};

#[derive(Arbitrary, Debug)]
struct Input {
    seed: u64,
    lines: Vec<String>,
}

fuzz_target!(|input: Input| {
    let mut engine = GameEngine::new(GameConfig {
        seed: Some(input.seed),
        ..GameConfig::default()
    });

    for line in input.lines.iter().take(200) {
        if matches!(line.parse::<Command>(), Ok(Command::Save | Command::Load)) {
            continue;
        }
        let before = engine.status();
        let response = engine.execute_line(line);
        if before.is_over() {
            assert_eq!(response.status, before);
        }

        let violations = check_invariants(&engine);
        assert!(violations.is_empty(), "after {line:?}: {violations:?}");
    }
});
