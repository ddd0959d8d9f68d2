use std::{collections::VecDeque, fmt::Debug};

use rand::{rngs::StdRng, Rng, SeedableRng};

pub const DIE_SIDES: u8 = 6;

pub trait Die: Debug {
    /// Returns a face value in `1..=6`.
    fn roll(&mut self) -> u8;
}

#[derive(Debug)]
pub struct SixSidedDie {
    rng: StdRng,
}

impl SixSidedDie {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SixSidedDie {
    fn default() -> Self {
        Self::new()
    }
}

impl Die for SixSidedDie {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_SIDES)
    }
}

/// Replays a fixed sequence of faces, then falls back to rolling 1s so an
/// exhausted script always ends the turn in progress.
#[derive(Debug, Default)]
pub struct LoadedDie {
    faces: VecDeque<u8>,
}

impl LoadedDie {
    /// # Panics
    ///
    /// Panics if any face is outside `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: VecDeque<u8> = faces.into_iter().collect();
        assert!(
            faces.iter().all(|face| (1..=DIE_SIDES).contains(face)),
            "Loaded die faces must be between 1 and {DIE_SIDES}: {faces:?}"
        );
        Self { faces }
    }

    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Die for LoadedDie {
    fn roll(&mut self) -> u8 {
        self.faces.pop_front().unwrap_or(1)
    }
}
