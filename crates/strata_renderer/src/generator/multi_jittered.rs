use super::{below_one, side_for, uniform2, SamplesGenerator};
use glam::Vec2;
use rand::{Rng, RngCore};

/// Multi-jittered sampling (Chiu, Shirley and Wang).
///
/// Each of the `side x side` cells holds one sample, and inside the finer
/// `n x n` grid (`n = side * side`) every row and every column of sub-cells
/// holds exactly one sample. The shuffles only permute x-coordinates within a
/// cell column and y-coordinates within a cell row, so both properties survive.
#[derive(Debug, Clone)]
pub struct MultiJittered {
    num_sets: usize,
    side: usize,
}

impl MultiJittered {
    pub fn new(num_sets: usize, num_samples: usize) -> Self {
        Self {
            num_sets: num_sets.max(1),
            side: side_for(num_samples),
        }
    }

    /// Permute x-coordinates among the samples of each cell column.
    fn shuffle_x(&self, samples: &mut [Vec2], rng: &mut dyn RngCore) {
        let side = self.side;
        for col in 0..side {
            for row in (1..side).rev() {
                let other = rng.gen_range(0..=row);
                let a = row * side + col;
                let b = other * side + col;
                let tmp = samples[a].x;
                samples[a].x = samples[b].x;
                samples[b].x = tmp;
            }
        }
    }

    /// Permute y-coordinates among the samples of each cell row.
    fn shuffle_y(&self, samples: &mut [Vec2], rng: &mut dyn RngCore) {
        let side = self.side;
        for row in 0..side {
            let start = row * side;
            for col in (1..side).rev() {
                let other = rng.gen_range(0..=col);
                let a = start + col;
                let b = start + other;
                let tmp = samples[a].y;
                samples[a].y = samples[b].y;
                samples[b].y = tmp;
            }
        }
    }
}

impl SamplesGenerator for MultiJittered {
    fn name(&self) -> &'static str {
        "multi_jittered"
    }

    fn side(&self) -> usize {
        self.side
    }

    fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn generate_set(&self, rng: &mut dyn RngCore) -> Vec<Vec2> {
        let side = self.side;
        let subcell_size = 1.0 / self.num_samples() as f32;
        let mut samples = Vec::with_capacity(self.num_samples());
        for row in 0..side {
            for col in 0..side {
                let sub = Vec2::new((col * side + row) as f32, (row * side + col) as f32);
                samples.push(below_one((sub + uniform2(rng)) * subcell_size));
            }
        }
        self.shuffle_x(&mut samples, rng);
        self.shuffle_y(&mut samples, rng);
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
    fn test_one_sample_per_row_and_column_bin() {
        let mut rng = StdRng::seed_from_u64(42);
        for side in [2, 3, 4, 8] {
            let n = side * side;
            let gen = MultiJittered::new(5, n);
            let samples = gen.generate(&mut rng);
            assert_in_unit_square(&samples);
            for set in samples.chunks(n) {
                assert_eq!(bin_counts(set.iter().map(|s| s.x), n), vec![1; n]);
                assert_eq!(bin_counts(set.iter().map(|s| s.y), n), vec![1; n]);
            }
        }
    }

    #[test]
    fn test_one_sample_per_grid_cell() {
        let mut rng = StdRng::seed_from_u64(9);
        for side in [2, 3, 4, 8] {
            let samples = MultiJittered::new(3, side * side).generate(&mut rng);
            for set in samples.chunks(side * side) {
                let mut cells = vec![0; side * side];
                for s in set {
                    let cx = ((s.x * side as f32) as usize).min(side - 1);
                    let cy = ((s.y * side as f32) as usize).min(side - 1);
                    cells[cy * side + cx] += 1;
                }
                assert_eq!(cells, vec![1; side * side]);
            }
        }
    }

    #[test]
    fn test_shuffle_changes_layout_between_sets() {
        let mut rng = StdRng::seed_from_u64(1234);
        let samples = MultiJittered::new(2, 64).generate(&mut rng);
        assert_ne!(samples[..64], samples[64..]);
    }
}
