use rand::rngs::StdRng;

use crate::game::action::BuildAction;

pub mod greedy;
pub mod random;

pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;

/// Candidate-choice policy for a player's turn. Strategies pick an index into
/// the candidate list and draw from the engine's single RNG stream, so a
/// seeded run stays reproducible regardless of strategy.
pub trait Strategy {
    fn choose(&self, candidates: &[BuildAction], rng: &mut StdRng) -> Option<usize>;
}
