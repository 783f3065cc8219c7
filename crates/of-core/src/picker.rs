//! Injectable statement selection.
//!
//! The engine never touches an RNG directly; it asks a [`StatementPicker`]
//! for an index into the pool. Sessions use a seeded [`RandomPicker`],
//! tests pin draws with a [`ScriptedPicker`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which statement is drawn next.
pub trait StatementPicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform draws from a seeded RNG.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Create a picker with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a picker seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, otherwise from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl StatementPicker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    /// Create a picker from a script. An empty script always yields 0.
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A picker that always draws the same index.
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl StatementPicker for ScriptedPicker {
    fn pick_index(&mut self, _len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        index
    }
}
