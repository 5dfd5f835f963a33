use crate::error::ValidationError;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Tunables for order simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarratorSettings {
    /// Shortest simulated wait, in minutes.
    pub min_minutes: u32,
    /// Longest simulated wait, inclusive.
    pub max_minutes: u32,
    /// Order ids are drawn from `0..=max_order_id`.
    pub max_order_id: u32,
    /// Fixed seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for NarratorSettings {
    fn default() -> Self {
        Self {
            min_minutes: 1,
            max_minutes: 30,
            max_order_id: 10_000,
            seed: None,
        }
    }
}

impl NarratorSettings {
    pub fn with_minutes(mut self, min: u32, max: u32) -> Result<Self, ValidationError> {
        self.min_minutes = min;
        self.max_minutes = max;
        self.validate()?;
        Ok(self)
    }

    /// Rejects wait ranges that are empty or allow a zero-minute wait.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = (self.min_minutes, self.max_minutes);
        if min == 0 || min > max {
            return Err(ValidationError::InvalidTimeRange { min, max });
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// The random source these settings describe.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
