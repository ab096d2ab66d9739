use super::{below_one, side_for, uniform2, SamplesGenerator};
use glam::Vec2;
use rand::RngCore;

/// One uniformly random point inside each cell of a `side x side` grid.
#[derive(Debug, Clone)]
pub struct Jittered {
    num_sets: usize,
    side: usize,
}

impl Jittered {
    pub fn new(num_sets: usize, num_samples: usize) -> Self {
        Self {
            num_sets: num_sets.max(1),
            side: side_for(num_samples),
        }
    }
}

impl SamplesGenerator for Jittered {
    fn name(&self) -> &'static str {
        "jittered"
    }

    fn side(&self) -> usize {
        self.side
    }

    fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn generate_set(&self, rng: &mut dyn RngCore) -> Vec<Vec2> {
        let cell_size = 1.0 / self.side as f32;
        let mut samples = Vec::with_capacity(self.num_samples());
        for y in 0..self.side {
            for x in 0..self.side {
                let cell = Vec2::new(x as f32, y as f32);
                samples.push(below_one((cell + uniform2(rng)) * cell_size));
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_jittered_one_sample_per_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let side = 4;
        let samples = Jittered::new(1, side * side).generate(&mut rng);
        for (i, s) in samples.iter().enumerate() {
            let (cx, cy) = (i % side, i / side);
            assert_eq!((s.x * side as f32) as usize, cx);
            assert_eq!((s.y * side as f32) as usize, cy);
        }
    }
}
