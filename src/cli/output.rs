//! Output formatting for the simulate command.

// Averages over game counts, which stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use quest::sim::{Ending, Outcome};
use serde::Serialize;

/// Aggregated autopilot results.
#[derive(Debug, Default)]
pub(super) struct SimulationStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Games where the boss fell.
    pub(super) victories: u64,
    /// Games where the player fell.
    pub(super) defeats: u64,
    /// Games where the route ran out.
    pub(super) unfinished: u64,
    /// Total commands across all games.
    total_turns: u64,
    /// Total gold across all games.
    total_gold: u64,
    /// Health left, summed over victories only.
    victory_health: u64,
}

impl SimulationStats {
    /// Add a game outcome to the stats.
    pub(super) fn add_outcome(&mut self, outcome: &Outcome) {
        self.games_played += 1;
        self.total_turns += u64::from(outcome.turns);
        self.total_gold += u64::from(outcome.gold);
        match outcome.ending {
            Ending::Victory => {
                self.victories += 1;
                self.victory_health += u64::from(outcome.health);
            }
            Ending::Defeat => self.defeats += 1,
            Ending::Unfinished => self.unfinished += 1,
        }
    }

    /// Merge another set of stats into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.victories += other.victories;
        self.defeats += other.defeats;
        self.unfinished += other.unfinished;
        self.total_turns += other.total_turns;
        self.total_gold += other.total_gold;
        self.victory_health += other.victory_health;
    }

    /// Fraction of games won (0.0-1.0).
    pub(super) fn win_rate(&self) -> f64 {
        ratio(self.victories, self.games_played)
    }

    /// Average commands per game.
    pub(super) fn avg_turns(&self) -> f64 {
        ratio(self.total_turns, self.games_played)
    }

    /// Average gold per game.
    pub(super) fn avg_gold(&self) -> f64 {
        ratio(self.total_gold, self.games_played)
    }

    /// Average health left after a victory.
    pub(super) fn avg_victory_health(&self) -> f64 {
        ratio(self.victory_health, self.victories)
    }
}

fn ratio(total: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}

/// JSON-serializable simulation result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimulationResult {
    /// Total games played.
    games_played: u64,
    /// Games won.
    victories: u64,
    /// Games lost.
    defeats: u64,
    /// Games that ran out of route.
    unfinished: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
    /// Average commands per game.
    avg_turns: f64,
    /// Average gold per game.
    avg_gold: f64,
    /// Average health left after a victory.
    avg_victory_health: f64,
    /// Sessions compiled into the build.
    sessions: Vec<&'static str>,
}

impl JsonSimulationResult {
    /// Create from stats.
    pub(super) fn from_stats(stats: &SimulationStats) -> Self {
        Self {
            games_played: stats.games_played,
            victories: stats.victories,
            defeats: stats.defeats,
            unfinished: stats.unfinished,
            win_rate: stats.win_rate(),
            avg_turns: stats.avg_turns(),
            avg_gold: stats.avg_gold(),
            avg_victory_health: stats.avg_victory_health(),
            sessions: quest::sessions::available().map(|s| s.feature).collect(),
        }
    }
}

/// Format simulation stats as human-readable text.
pub(super) fn format_simulation_text(stats: &SimulationStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Simulation Results ({} games)\n", stats.games_played));
    output.push_str("========================================\n\n");

    let percent = |n: u64| ratio(n, stats.games_played) * 100.0;
    output.push_str("Outcomes:\n");
    output.push_str(&format!(
        "  Victory:    {:.1}% ({} games)\n",
        percent(stats.victories),
        stats.victories
    ));
    output.push_str(&format!(
        "  Defeat:     {:.1}% ({} games)\n",
        percent(stats.defeats),
        stats.defeats
    ));
    output.push_str(&format!(
        "  Unfinished: {:.1}% ({} games)\n\n",
        percent(stats.unfinished),
        stats.unfinished
    ));

    output.push_str(&format!("Average Commands: {:.1}\n", stats.avg_turns()));
    output.push_str(&format!("Average Gold: {:.0}\n", stats.avg_gold()));
    output.push_str(&format!(
        "Average Health After Victory: {:.1}\n",
        stats.avg_victory_health()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ending: Ending, gold: u32, health: u32) -> Outcome {
        Outcome {
            seed: 0,
            ending,
            turns: 10,
            gold,
            health,
        }
    }

    #[test]
    fn test_stats_aggregate() {
        let mut stats = SimulationStats::default();
        stats.add_outcome(&outcome(Ending::Victory, 1000, 40));
        stats.add_outcome(&outcome(Ending::Defeat, 200, 0));

        let mut other = SimulationStats::default();
        other.add_outcome(&outcome(Ending::Victory, 1000, 60));
        other.add_outcome(&outcome(Ending::Unfinished, 0, 100));
        stats.merge(&other);

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.victories, 2);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
        assert!((stats.avg_gold() - 550.0).abs() < f64::EPSILON);
        assert!((stats.avg_victory_health() - 50.0).abs() < f64::EPSILON);
        assert!((stats.avg_turns() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_stats_do_not_divide_by_zero() {
        let stats = SimulationStats::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert!(format_simulation_text(&stats).contains("(0 games)"));
    }

    #[test]
    fn test_json_fields() {
        let mut stats = SimulationStats::default();
        stats.add_outcome(&outcome(Ending::Victory, 1025, 30));
        let json = serde_json::to_value(JsonSimulationResult::from_stats(&stats)).unwrap();
        assert_eq!(json["games_played"], 1);
        assert_eq!(json["victories"], 1);
        assert_eq!(json["win_rate"], 1.0);
    }
}
