use super::{below_one, side_for, uniform2, SamplesGenerator};
use glam::Vec2;
use rand::{Rng, RngCore};

/// N-rooks (Latin hypercube) sampling.
///
/// Samples start on the diagonal of an `n x n` grid; x and y are then shuffled
/// independently, leaving exactly one sample in every row and every column.
#[derive(Debug, Clone)]
pub struct NRooks {
    num_sets: usize,
    side: usize,
}

impl NRooks {
    pub fn new(num_sets: usize, num_samples: usize) -> Self {
        Self {
            num_sets: num_sets.max(1),
            side: side_for(num_samples),
        }
    }
}

impl SamplesGenerator for NRooks {
    fn name(&self) -> &'static str {
        "n_rooks"
    }

    fn side(&self) -> usize {
        self.side
    }

    fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn generate_set(&self, rng: &mut dyn RngCore) -> Vec<Vec2> {
        let n = self.num_samples();
        let cell_size = 1.0 / n as f32;
        let mut samples: Vec<Vec2> = (0..n)
            .map(|k| below_one((Vec2::splat(k as f32) + uniform2(rng)) * cell_size))
            .collect();
        for k in (1..n).rev() {
            let other = rng.gen_range(0..=k);
            let tmp = samples[k].x;
            samples[k].x = samples[other].x;
            samples[other].x = tmp;
        }
        for k in (1..n).rev() {
            let other = rng.gen_range(0..=k);
            let tmp = samples[k].y;
            samples[k].y = samples[other].y;
            samples[other].y = tmp;
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{assert_in_unit_square, bin_counts};
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_latin_hypercube_property() {
        let mut rng = StdRng::seed_from_u64(42);
        for side in [2, 3, 4, 8] {
            let n = side * side;
            let samples = NRooks::new(4, n).generate(&mut rng);
            assert_in_unit_square(&samples);
            for set in samples.chunks(n) {
                assert_eq!(bin_counts(set.iter().map(|s| s.x), n), vec![1; n]);
                assert_eq!(bin_counts(set.iter().map(|s| s.y), n), vec![1; n]);
            }
        }
    }

    #[test]
    fn test_shuffle_breaks_diagonal() {
        let mut rng = StdRng::seed_from_u64(77);
        let samples = NRooks::new(1, 64).generate(&mut rng);
        let on_diagonal = samples
            .iter()
            .filter(|s| (s.x * 64.0) as usize == (s.y * 64.0) as usize)
            .count();
        assert!(on_diagonal < 64);
    }
}
