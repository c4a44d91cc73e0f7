pub mod action;
pub mod bank;
pub mod dice;
pub mod events;
pub mod game;
pub mod players;
pub mod resources;
pub mod state;

pub use action::BuildAction;
pub use bank::Bank;
pub use events::{EventSink, GameEvent, NullSink, Transcript};
pub use game::{Game, GameSummary, PlayerSummary};
pub use players::PlayerState;
pub use resources::{COST_CITY, COST_ROAD, COST_SETTLEMENT, ResourceBundle, ResourceError};
pub use state::{GameConfig, GameError, GamePhase, GameState};
