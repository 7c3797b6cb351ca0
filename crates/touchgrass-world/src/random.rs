//! Randomness seam for generation and flavor text.
//!
//! Every probabilistic rule in the game (description choice, item spawns,
//! event rolls, complaint lines, battery drain) draws from a
//! [`RandomSource`]. Any [`rand::Rng`] qualifies, so production code passes
//! `rand::rng()`. Tests pass a [`ScriptedRandom`] to pin the outcome of each
//! draw.

/// A source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Return `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Draw an index in `[0, len)`, or `None` when `len` is zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        // Pools are tiny, so the float product is exact enough and never negative.
        let scaled = (self.next_f64() * len as f64).floor() as usize;
        Some(scaled.min(len.saturating_sub(1)))
    }
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Pick one element of `pool` uniformly at random.
pub fn choose<'a, T>(rng: &mut (impl RandomSource + ?Sized), pool: &'a [T]) -> Option<&'a T> {
    rng.index(pool.len()).and_then(|idx| pool.get(idx))
}

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Largest value a script may produce.
    const CEILING: f64 = 1.0 - f64::EPSILON;

    /// Create a source that cycles through `values`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Create a source that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws made so far.
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let slot = self.cursor.checked_rem(self.values.len()).unwrap_or(0);
        self.cursor = self.cursor.saturating_add(1);
        self.values
            .get(slot)
            .copied()
            .unwrap_or(0.0)
            .clamp(0.0, Self::CEILING)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn scripted_values_cycle() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.9]);
        assert!((rng.next_f64() - 0.1).abs() < f64::EPSILON);
        assert!((rng.next_f64() - 0.9).abs() < f64::EPSILON);
        assert!((rng.next_f64() - 0.1).abs() < f64::EPSILON);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn scripted_values_are_clamped() {
        let mut rng = ScriptedRandom::new(vec![1.5, -2.0]);
        let high = rng.next_f64();
        assert!(high < 1.0);
        assert!(high > 0.99);
        assert!(rng.next_f64().abs() < f64::EPSILON);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut rng = ScriptedRandom::default();
        assert!(rng.next_f64().abs() < f64::EPSILON);
    }

    #[test]
    fn index_covers_whole_pool() {
        assert_eq!(ScriptedRandom::constant(0.0).index(3), Some(0));
        assert_eq!(ScriptedRandom::constant(0.5).index(3), Some(1));
        assert_eq!(ScriptedRandom::constant(0.999).index(3), Some(2));
        assert_eq!(ScriptedRandom::constant(0.5).index(0), None);
    }

    #[test]
    fn chance_compares_against_probability() {
        assert!(ScriptedRandom::constant(0.05).chance(0.1));
        assert!(!ScriptedRandom::constant(0.1).chance(0.1));
    }

    #[test]
    fn choose_from_empty_pool() {
        let pool: [&str; 0] = [];
        assert!(choose(&mut ScriptedRandom::constant(0.3), &pool).is_none());
    }

    #[test]
    fn seeded_rng_stays_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = RandomSource::next_f64(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
