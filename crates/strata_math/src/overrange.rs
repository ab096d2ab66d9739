use crate::Vec2;

/// How a normalized coordinate outside `[0, 1]` is brought back into range.
///
/// Values already inside `[0, 1]` (endpoints included) are returned untouched
/// by every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overrange {
    /// No reduction; out-of-range values pass through.
    Keep,
    /// Saturate at the nearest endpoint.
    Clamp,
    /// Wrap around, as if the range tiled the line.
    Repeat,
    /// Reflect back at each endpoint.
    #[default]
    Mirror,
}

impl Overrange {
    /// Reduce a single coordinate.
    pub fn reduce(self, t: f32) -> f32 {
        if (0.0..=1.0).contains(&t) {
            return t;
        }
        match self {
            Overrange::Keep => t,
            Overrange::Clamp => t.clamp(0.0, 1.0),
            Overrange::Repeat => t.rem_euclid(1.0),
            Overrange::Mirror => {
                let m = t.rem_euclid(2.0);
                if m > 1.0 {
                    2.0 - m
                } else {
                    m
                }
            }
        }
    }

    /// Reduce both components of a point.
    pub fn reduce2(self, p: Vec2) -> Vec2 {
        Vec2::new(self.reduce(p.x), self.reduce(p.y))
    }
}
