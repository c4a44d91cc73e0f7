#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cli;
pub mod config;
pub mod game;
pub mod players;
pub mod types;

pub use board::Board;
pub use config::Config;
pub use game::{Game, GameConfig, GameState, GameSummary};
pub use types::{Color, Resource};
