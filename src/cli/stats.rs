use std::collections::HashMap;
use std::time::Duration;

use crate::game::GameSummary;
use crate::types::Color;

/// Accumulates outcomes across a `--games` batch.
#[derive(Debug, Default, Clone)]
pub struct GameStats {
    pub wins: HashMap<Color, u32>,
    pub results_by_player: HashMap<Color, Vec<u8>>,
    pub games: u32,
    pub total_rounds: u64,
    pub total_duration: Duration,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, summary: &GameSummary, duration: Duration) {
        self.games += 1;
        self.total_duration += duration;
        self.total_rounds += summary.rounds_played as u64;

        if let Some(winner) = summary.winner {
            *self.wins.entry(winner).or_insert(0) += 1;
        }
        for player in &summary.players {
            self.results_by_player
                .entry(player.color)
                .or_default()
                .push(player.victory_points);
        }
    }

    pub fn avg_rounds(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.games as f64
    }

    pub fn avg_vps(&self, color: Color) -> f64 {
        match self.results_by_player.get(&color) {
            Some(vps) if !vps.is_empty() => {
                vps.iter().map(|&v| v as f64).sum::<f64>() / vps.len() as f64
            }
            _ => 0.0,
        }
    }

    pub fn avg_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games
    }
}

pub struct StatisticsAccumulator {
    pub stats: GameStats,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self {
            stats: GameStats::new(),
        }
    }

    pub fn after(&mut self, summary: &GameSummary, duration: Duration) {
        self.stats.record_game(summary, duration);
    }
}

impl Default for StatisticsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
