use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, EdgeId, NodeId};
use crate::game::action::BuildAction;
use crate::game::bank::Bank;
use crate::game::dice;
use crate::game::events::{EventSink, GameEvent};
use crate::game::players::PlayerState;
use crate::game::resources::ResourceError;
use crate::players::Strategy;
use crate::types::{Color, Resource};

/// A longest-road claim needs to strictly beat this, i.e. five or more.
const LONGEST_ROAD_FLOOR: u32 = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_players: usize,
    pub max_rounds: u32,
    pub vps_to_win: u8,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            max_rounds: 50,
            vps_to_win: 10,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    Rounds,
    Terminal { winner: Option<Color> },
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("node {0} already occupied")]
    NodeOccupied(NodeId),
    #[error("edge {0:?} already occupied")]
    EdgeOccupied(EdgeId),
    #[error("edge {0:?} not on the board")]
    UnknownEdge(EdgeId),
    #[error("node {0} has no settlement to upgrade")]
    NotASettlement(NodeId),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// The whole mutable simulation state: board occupancy, player hands and
/// piece counters, the bank, the longest-road title, and the single RNG
/// stream that feeds dice, setup placement, and strategy choice.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub players: Vec<PlayerState>,
    pub bank: Bank,
    pub phase: GamePhase,
    pub round: u32,
    longest_road_len: u32,
    longest_road_holder: Option<Color>,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        assert!(
            (2..=4).contains(&config.num_players),
            "the game supports between 2 and 4 players"
        );
        let rng = StdRng::seed_from_u64(config.seed);
        let players = Color::ORDERED
            .iter()
            .take(config.num_players)
            .map(|color| PlayerState::new(*color))
            .collect();
        Self {
            config,
            board: Board::standard(),
            players,
            bank: Bank::standard(),
            phase: GamePhase::Setup,
            round: 0,
            longest_road_len: LONGEST_ROAD_FLOOR,
            longest_road_holder: None,
            rng,
        }
    }

    pub fn finished(&self) -> bool {
        matches!(self.phase, GamePhase::Terminal { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            GamePhase::Terminal { winner } => winner,
            _ => None,
        }
    }

    pub fn longest_road_title(&self) -> Option<(Color, u32)> {
        self.longest_road_holder
            .map(|color| (color, self.longest_road_len))
    }

    /// Victory points for one player: board buildings plus the road title.
    pub fn victory_points(&self, color: Color) -> u8 {
        let mut vp = self.board.victory_points(color);
        if self.longest_road_holder == Some(color) {
            vp += 2;
        }
        vp
    }

    /// Snake-draft setup: every player places a settlement and an adjacent
    /// road in seat order, then again in reverse. The second placement grants
    /// one unit per adjacent producing tile.
    pub fn run_setup(&mut self, sink: &mut dyn EventSink) -> Result<(), GameError> {
        for idx in 0..self.players.len() {
            self.place_initial(idx, false, sink)?;
        }
        for idx in (0..self.players.len()).rev() {
            self.place_initial(idx, true, sink)?;
        }
        self.phase = GamePhase::Rounds;
        Ok(())
    }

    fn place_initial(
        &mut self,
        idx: usize,
        grant_resources: bool,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let candidates = self.board.setup_candidates();
        if candidates.is_empty() {
            // cannot happen on a 54-node board with at most 8 setup settlements
            log::warn!("no setup candidates left, skipping placement");
            return Ok(());
        }
        let node = candidates[self.rng.gen_range(0..candidates.len())];
        let color = self.players[idx].color;
        self.board.place_settlement(node, color)?;
        self.players[idx].settlements_left -= 1;
        sink.emit(self.round, &GameEvent::SettlementPlaced { color, node });

        let free = self.board.free_edges_at(node);
        if !free.is_empty() {
            let edge = free[self.rng.gen_range(0..free.len())];
            self.board.place_road(edge, color)?;
            self.players[idx].roads_left -= 1;
            sink.emit(self.round, &GameEvent::RoadPlaced { color, edge });
        }

        if grant_resources {
            self.grant_starting_resources(idx, node, sink);
        }
        Ok(())
    }

    /// One unit per adjacent producing tile, each kind granted independently:
    /// a bank short on one kind skips only that unit.
    fn grant_starting_resources(&mut self, idx: usize, node: NodeId, sink: &mut dyn EventSink) {
        let kinds: Vec<Resource> = self.board.node(node).tiles.iter()
            .filter_map(|&tile_id| self.board.tiles()[tile_id as usize].resource)
            .collect();
        let color = self.players[idx].color;
        for resource in kinds {
            if self.bank.has_enough(resource, 1) {
                self.bank.withdraw(resource, 1);
                self.players[idx].resources.add(resource, 1);
                sink.emit(
                    self.round,
                    &GameEvent::ResourcesGranted {
                        color,
                        resource,
                        amount: 1,
                    },
                );
            }
        }
    }

    /// One full round: roll, distribute, then every player's turn with a
    /// longest-road update and a win check after each. Returns the winner as
    /// soon as one exists.
    pub fn play_round<S: Strategy>(
        &mut self,
        strategies: &[S],
        sink: &mut dyn EventSink,
    ) -> Result<Option<Color>, GameError> {
        self.round += 1;
        let sum = dice::roll(&mut self.rng);
        sink.emit(self.round, &GameEvent::DiceRolled { sum });
        if sum != 7 {
            self.distribute(sum, sink);
        }
        // a 7 produces nothing

        for idx in 0..self.players.len() {
            self.take_turn(idx, &strategies[idx], sink)?;
            self.update_longest_road(sink);
            if let Some(winner) = self.check_win(sink) {
                return Ok(Some(winner));
            }
        }
        Ok(None)
    }

    /// Pays every occupied node of every matching tile. The whole per-node
    /// grant is skipped when the bank cannot cover it; no partial units.
    fn distribute(&mut self, sum: u8, sink: &mut dyn EventSink) {
        let mut grants: Vec<(Color, Resource, u8)> = Vec::new();
        for tile in self.board.tiles_producing(sum) {
            let Some(resource) = tile.resource else {
                continue;
            };
            for &node_id in &tile.nodes {
                if let Some(building) = self.board.node(node_id).building {
                    grants.push((building.owner, resource, building.resource_multiplier()));
                }
            }
        }
        for (color, resource, amount) in grants {
            if self.bank.has_enough(resource, amount) {
                self.bank.withdraw(resource, amount);
                self.player_mut(color).resources.add(resource, amount);
                sink.emit(
                    self.round,
                    &GameEvent::ResourcesGranted {
                        color,
                        resource,
                        amount,
                    },
                );
            }
        }
    }

    /// One player's turn: enumerate candidates, let the strategy pick one,
    /// execute, and keep going only while the hand holds more than 7 cards.
    fn take_turn(
        &mut self,
        idx: usize,
        strategy: &dyn Strategy,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        loop {
            let candidates = self.enumerate_actions(idx);
            if candidates.is_empty() {
                return Ok(());
            }
            let Some(choice) = strategy.choose(&candidates, &mut self.rng) else {
                return Ok(());
            };
            self.execute(idx, candidates[choice], sink)?;
            if self.players[idx].total_cards() <= 7 {
                return Ok(());
            }
        }
    }

    /// Every currently legal build for the player, city then settlement then
    /// road, each capability crossed with the board's candidate targets.
    pub fn enumerate_actions(&self, idx: usize) -> Vec<BuildAction> {
        let player = &self.players[idx];
        let mut actions = Vec::new();
        if player.can_build_city() {
            actions.extend(
                self.board
                    .upgrade_candidates(player.color)
                    .into_iter()
                    .map(BuildAction::City),
            );
        }
        if player.can_build_settlement() {
            actions.extend(
                self.board
                    .settlement_candidates(player.color)
                    .into_iter()
                    .map(BuildAction::Settlement),
            );
        }
        if player.can_build_road() {
            actions.extend(
                self.board
                    .road_candidates(player.color)
                    .into_iter()
                    .map(BuildAction::Road),
            );
        }
        actions
    }

    fn execute(
        &mut self,
        idx: usize,
        action: BuildAction,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let color = self.players[idx].color;
        self.players[idx].resources.subtract_bundle(action.cost())?;
        self.bank.receive(action.cost());
        match action {
            BuildAction::City(node) => {
                self.board.upgrade_to_city(node)?;
                let player = &mut self.players[idx];
                player.cities_left -= 1;
                // the upgraded settlement piece comes back off the board
                player.settlements_left += 1;
                sink.emit(self.round, &GameEvent::CityBuilt { color, node });
            }
            BuildAction::Settlement(node) => {
                self.board.place_settlement(node, color)?;
                self.players[idx].settlements_left -= 1;
                sink.emit(self.round, &GameEvent::SettlementBuilt { color, node });
            }
            BuildAction::Road(edge) => {
                self.board.place_road(edge, color)?;
                self.players[idx].roads_left -= 1;
                sink.emit(self.round, &GameEvent::RoadBuilt { color, edge });
            }
        }
        Ok(())
    }

    /// Ratchet scan in seat order: the title moves only when a length
    /// strictly exceeds the best seen so far; ties never transfer. The
    /// ratchet advances whenever exceeded, holder change or not.
    fn update_longest_road(&mut self, sink: &mut dyn EventSink) {
        for idx in 0..self.players.len() {
            let color = self.players[idx].color;
            let length = self.board.longest_road(color);
            if length > self.longest_road_len {
                self.longest_road_len = length;
                if self.longest_road_holder != Some(color) {
                    self.longest_road_holder = Some(color);
                    sink.emit(
                        self.round,
                        &GameEvent::LongestRoadClaimed { color, length },
                    );
                }
            }
        }
    }

    fn check_win(&mut self, sink: &mut dyn EventSink) -> Option<Color> {
        for idx in 0..self.players.len() {
            let color = self.players[idx].color;
            let points = self.victory_points(color);
            if points >= self.config.vps_to_win {
                sink.emit(self.round, &GameEvent::GameWon { color, points });
                self.phase = GamePhase::Terminal {
                    winner: Some(color),
                };
                return Some(color);
            }
        }
        None
    }

    pub(crate) fn end_by_round_limit(&mut self) {
        if !self.finished() {
            self.phase = GamePhase::Terminal { winner: None };
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut PlayerState {
        self.players
            .iter_mut()
            .find(|p| p.color == color)
            .expect("unknown player color")
    }
}
