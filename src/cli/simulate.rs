//! Simulate command implementation.

use super::output::{JsonSimulationResult, SimulationStats, format_simulation_text};
use super::{CliError, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use quest::CharacterClass;
use quest::sim;
use rayon::prelude::*;
use std::time::Instant;

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the progress bar template or JSON output fails.
pub(crate) fn execute(
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    class: CharacterClass,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = seed.unwrap_or_else(|| quest::rng::Rng::from_entropy().next_u64());

    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Each thread folds into its own stats, merged at the end
    let stats = (0..games)
        .into_par_iter()
        .fold(SimulationStats::default, |mut local_stats, i| {
            let outcome = sim::play_as(base_seed.wrapping_add(i), class);
            local_stats.add_outcome(&outcome);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            local_stats
        })
        .reduce(SimulationStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", format_simulation_text(&stats));
            println!();
            println!("Base seed: {base_seed}");
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonSimulationResult::from_stats(&stats))?;
            println!("{json}");
        }
    }

    Ok(())
}
