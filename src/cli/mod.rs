pub mod players;
pub mod stats;

pub use players::{CLI_STRATEGIES, CliStrategy, StrategyInstance, create_strategy, print_strategy_help};
pub use stats::{GameStats, StatisticsAccumulator};
