use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Seeded source used when dealing demo boards, so a seed always reproduces
/// the same table.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniform count in `min..=max`.
    pub fn count_between(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_stays_in_range() {
        let mut rng = RngState::from_seed(3);
        for _ in 0..50 {
            let count = rng.count_between(1, 4);
            assert!((1..=4).contains(&count));
        }
        assert_eq!(rng.count_between(5, 2), 5);
        assert_eq!(rng.seed(), 3);
    }
}
