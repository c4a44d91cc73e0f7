use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::events::EventSink;
use crate::game::state::{GameConfig, GameError, GameState};
use crate::players::Strategy;
use crate::types::Color;

/// One simulation run: setup, rounds until a win or the round cap, summary.
pub struct Game {
    pub id: Uuid,
    pub state: GameState,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: GameState::new(config),
        }
    }

    pub fn play<S: Strategy>(
        &mut self,
        strategies: &[S],
        sink: &mut dyn EventSink,
    ) -> Result<GameSummary, GameError> {
        assert_eq!(
            strategies.len(),
            self.state.players.len(),
            "one strategy per seat"
        );
        self.state.run_setup(sink)?;
        while self.state.round < self.state.config.max_rounds && !self.state.finished() {
            self.state.play_round(strategies, sink)?;
        }
        self.state.end_by_round_limit();
        Ok(self.summary())
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            rounds_played: self.state.round,
            players: self
                .state
                .players
                .iter()
                .map(|player| PlayerSummary {
                    color: player.color,
                    victory_points: self.state.victory_points(player.color),
                    resource_cards: player.total_cards(),
                })
                .collect(),
            longest_road: self.state.longest_road_title(),
            winner: self.state.winner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub color: Color,
    pub victory_points: u8,
    pub resource_cards: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub players: Vec<PlayerSummary>,
    pub longest_road: Option<(Color, u32)>,
    pub winner: Option<Color>,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Game Over ===")?;
        writeln!(f, "Rounds played: {}", self.rounds_played)?;
        writeln!(
            f,
            "{}",
            self.players
                .iter()
                .map(|p| format!(
                    "{}: {} VP, {} resource cards",
                    p.color, p.victory_points, p.resource_cards
                ))
                .join("\n")
        )?;
        if let Some((color, length)) = self.longest_road {
            writeln!(f, "Longest road: {color} ({length})")?;
        }
        match self.winner {
            Some(color) => writeln!(f, "Winner: {color}"),
            None => writeln!(f, "Winner: none (round limit reached)"),
        }
    }
}
