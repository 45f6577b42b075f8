use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Fresh entropy for every pick. The default for the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible picks from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            // A panic while holding the lock leaves the rng state intact.
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

/// Either source, chosen at startup from configuration.
#[derive(Debug)]
pub enum ConfiguredRandom {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl ConfiguredRandom {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ConfiguredRandom::Seeded(SeededRandom::new(seed)),
            None => ConfiguredRandom::Thread(ThreadRandom),
        }
    }
}

impl RandomSource for ConfiguredRandom {
    fn pick_index(&self, len: usize) -> usize {
        match self {
            ConfiguredRandom::Thread(r) => r.pick_index(len),
            ConfiguredRandom::Seeded(r) => r.pick_index(len),
        }
    }
}
