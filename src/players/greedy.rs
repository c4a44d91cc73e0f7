use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::game::action::BuildAction;
use crate::players::Strategy;

/// Prefers cities over settlements over roads, choosing uniformly within the
/// best class present. Opt-in via the CLI; the reference behavior stays
/// [`RandomStrategy`](crate::players::RandomStrategy).
#[derive(Debug, Clone, Copy)]
pub struct GreedyStrategy;

fn tier(action: &BuildAction) -> u8 {
    match action {
        BuildAction::City(_) => 0,
        BuildAction::Settlement(_) => 1,
        BuildAction::Road(_) => 2,
    }
}

impl Strategy for GreedyStrategy {
    fn choose(&self, candidates: &[BuildAction], rng: &mut StdRng) -> Option<usize> {
        let best = candidates.iter().map(tier).min()?;
        let picks: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, action)| tier(action) == best)
            .map(|(idx, _)| idx)
            .collect();
        picks.choose(rng).copied()
    }
}
