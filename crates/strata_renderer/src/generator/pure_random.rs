use super::{side_for, uniform2, SamplesGenerator};
use glam::Vec2;
use rand::RngCore;

/// Independent uniform draws with no stratification.
#[derive(Debug, Clone)]
pub struct PureRandom {
    num_sets: usize,
    side: usize,
}

impl PureRandom {
    pub fn new(num_sets: usize, num_samples: usize) -> Self {
        Self {
            num_sets: num_sets.max(1),
            side: side_for(num_samples),
        }
    }
}

impl SamplesGenerator for PureRandom {
    fn name(&self) -> &'static str {
        "pure_random"
    }

    fn side(&self) -> usize {
        self.side
    }

    fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn generate_set(&self, rng: &mut dyn RngCore) -> Vec<Vec2> {
        (0..self.num_samples()).map(|_| uniform2(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pure_random_reproducible_with_seed() {
        let gen = PureRandom::new(4, 16);
        let a = gen.generate(&mut StdRng::seed_from_u64(3));
        let b = gen.generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_pure_random_sets_differ() {
        let gen = PureRandom::new(2, 9);
        let samples = gen.generate(&mut StdRng::seed_from_u64(5));
        assert_ne!(samples[..9], samples[9..]);
    }
}
