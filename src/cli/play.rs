//! Interactive play command.

use super::CliError;
use quest::{CharacterClass, GameConfig, GameEngine, GameStatus, render};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Execute the play command on stdin and stdout.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub(crate) fn execute(
    name: &str,
    class: CharacterClass,
    seed: Option<u64>,
    save_path: PathBuf,
) -> Result<(), CliError> {
    let mut engine = GameEngine::new(GameConfig {
        player_name: name.to_string(),
        class,
        seed,
        save_path,
        ..GameConfig::default()
    });
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut engine, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Read commands until the game ends or input runs out.
///
/// Blank lines are ignored. End of input counts as quitting.
pub(crate) fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
) -> Result<GameStatus, CliError> {
    write!(output, "{}", engine.banner())?;

    let mut lines = input.lines();
    loop {
        write!(output, "\n> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = engine.execute_line(&line);
        write!(output, "{}", response.text)?;
        if response.status.is_over() {
            break;
        }
    }

    write!(output, "{}", render::farewell())?;
    output.flush()?;
    Ok(engine.status())
}
