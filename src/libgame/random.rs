use crate::libgame::rules::Choice;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Picks the computer's move.
pub trait ChoiceSource {
    fn sample(&mut self) -> Choice;
}

/// Uniform sampling over the three choices, backed by any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded once from the wall clock, never reseeded.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::debug!("seeding computer choices with {}", seed);
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ChoiceSource for RngSource<R> {
    fn sample(&mut self) -> Choice {
        Choice::ALL[self.rng.gen_range(0..Choice::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roughly_uniform() {
        let mut source = RngSource::new(StdRng::seed_from_u64(7));
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            counts[source.sample().index()] += 1;
        }
        for (i, n) in counts.iter().enumerate() {
            assert!(*n > 900 && *n < 1100, "{:?} drawn {} times", Choice::ALL[i], n);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RngSource::new(StdRng::seed_from_u64(42));
        let mut b = RngSource::new(StdRng::seed_from_u64(42));
        let xs: Vec<Choice> = (0..20).map(|_| a.sample()).collect();
        let ys: Vec<Choice> = (0..20).map(|_| b.sample()).collect();
        assert_eq!(xs, ys);
    }
}
