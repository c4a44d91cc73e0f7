use rand::Rng;

/// Sum of two independent 1-6 draws: range 2-12, triangular distribution.
pub fn roll(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=6) + rng.gen_range(1..=6)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0u32; 13];
        for _ in 0..10_000 {
            let sum = roll(&mut rng);
            assert!((2..=12).contains(&sum));
            seen[sum as usize] += 1;
        }
        // every sum shows up over ten thousand draws, and 7 is the mode
        for sum in 2..=12 {
            assert!(seen[sum] > 0, "sum {sum} never rolled");
        }
        assert_eq!(seen.iter().enumerate().max_by_key(|&(_, &n)| n).map(|(s, _)| s), Some(7));
    }
}
