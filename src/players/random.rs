use rand::Rng;
use rand::rngs::StdRng;

use crate::game::action::BuildAction;
use crate::players::Strategy;

/// Uniform choice over every legal candidate.
#[derive(Debug, Clone, Copy)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose(&self, candidates: &[BuildAction], rng: &mut StdRng) -> Option<usize> {
        if candidates.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..candidates.len()))
        }
    }
}
