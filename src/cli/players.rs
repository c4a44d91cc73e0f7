use rand::rngs::StdRng;

use crate::game::action::BuildAction;
use crate::players::{GreedyStrategy, RandomStrategy, Strategy};

pub struct CliStrategy {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CLI_STRATEGIES: &[CliStrategy] = &[
    CliStrategy {
        code: "R",
        name: "RandomStrategy",
        description: "Chooses uniformly among all legal builds.",
    },
    CliStrategy {
        code: "G",
        name: "GreedyStrategy",
        description: "Prefers cities, then settlements, then roads.",
    },
];

#[derive(Clone, Copy)]
pub enum StrategyInstance {
    Random(RandomStrategy),
    Greedy(GreedyStrategy),
}

impl Strategy for StrategyInstance {
    fn choose(&self, candidates: &[BuildAction], rng: &mut StdRng) -> Option<usize> {
        match self {
            StrategyInstance::Random(s) => s.choose(candidates, rng),
            StrategyInstance::Greedy(s) => s.choose(candidates, rng),
        }
    }
}

impl StrategyInstance {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyInstance::Random(_) => "Random",
            StrategyInstance::Greedy(_) => "Greedy",
        }
    }
}

pub fn create_strategy(code: &str) -> Option<StrategyInstance> {
    match code {
        "R" => Some(StrategyInstance::Random(RandomStrategy)),
        "G" => Some(StrategyInstance::Greedy(GreedyStrategy)),
        _ => None,
    }
}

pub fn print_strategy_help() {
    println!("Strategy Legend:");
    println!("{:<5} {:<20} {}", "CODE", "STRATEGY", "DESCRIPTION");
    println!("{}", "-".repeat(70));
    for strategy in CLI_STRATEGIES {
        println!(
            "{:<5} {:<20} {}",
            strategy.code, strategy.name, strategy.description
        );
    }
}
