//! Quest CLI - play the dungeon crawler or run balance simulations.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use quest::CharacterClass;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "QUEST_LOG";

/// Quest - a text dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "quest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log engine events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively (the default)
    Play {
        /// Your adventurer's name
        #[arg(short, long, default_value = quest::game::DEFAULT_PLAYER_NAME)]
        name: String,

        /// Character class
        #[arg(short, long, default_value = "warrior")]
        class: cli::ClassArg,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Save file location
        #[arg(long, default_value = quest::save::DEFAULT_SAVE_PATH)]
        save_path: PathBuf,
    },

    /// Run many autopilot games in parallel and aggregate the outcomes
    Simulate {
        /// Number of games to run
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Character class for the autopilot
        #[arg(short, long, default_value = "warrior")]
        class: cli::ClassArg,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Print the session 01 display exercises
    Showcase,

    /// List which course sessions are compiled in
    Sessions,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("quest=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let command = args.command.unwrap_or(Commands::Play {
        name: quest::game::DEFAULT_PLAYER_NAME.to_string(),
        class: cli::ClassArg::Warrior,
        seed: None,
        save_path: PathBuf::from(quest::save::DEFAULT_SAVE_PATH),
    });

    let result = match command {
        Commands::Play {
            name,
            class,
            seed,
            save_path,
        } => cli::play::execute(&name, CharacterClass::from(class), seed, save_path),

        Commands::Simulate {
            games,
            seed,
            threads,
            class,
            format,
            progress,
        } => cli::simulate::execute(
            games,
            seed,
            threads,
            CharacterClass::from(class),
            format,
            progress,
        ),

        Commands::Showcase => cli::showcase::execute(),

        Commands::Sessions => {
            print!("{}", quest::render::session_report());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
