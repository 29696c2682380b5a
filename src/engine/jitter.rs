use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest perturbation, in score points, applied to the confidence value.
pub const MAX_JITTER: f64 = 5.0;

/// Source of the symmetric perturbation added to confidence.
pub trait JitterSource {
    /// Returns a value in `[-MAX_JITTER, MAX_JITTER]`.
    fn draw(&mut self) -> f64;
}

pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for RandomJitter {
    fn draw(&mut self) -> f64 {
        self.rng.random_range(-MAX_JITTER..=MAX_JITTER)
    }
}

/// Always returns the same offset, clamped into the jitter range.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn draw(&mut self) -> f64 {
        if self.0.is_nan() {
            return 0.0;
        }
        self.0.clamp(-MAX_JITTER, MAX_JITTER)
    }
}
