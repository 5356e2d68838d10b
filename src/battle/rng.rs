//! Random sources for damage rolls. `Rng` is a SplitMix64 generator: fast, seedable and
//! deterministic, not cryptographically secure. `ScriptedRng` replays fixed draws.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

/// Source of uniform integers for damage factors.
pub trait DamageRng {
    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn roll(&mut self, low: u32, high: u32) -> u32;
}

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds from OS entropy, falling back to the clock if the OS source is unavailable.
    pub fn from_entropy() -> Self {
        let mut bytes = [0_u8; 8];
        let seed = match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(err) => {
                tracing::warn!(%err, "os entropy unavailable, seeding from clock");
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(SPLITMIX64_GOLDEN)
            }
        };
        Self::new(seed)
    }

    /// Independent stream for a batch: same `(seed, stream)` always yields the same sequence.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let mut mixer = Self::new(seed ^ stream.wrapping_mul(SPLITMIX64_M1));
        Self::new(mixer.next_u64())
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }
}

impl DamageRng for Rng {
    #[inline]
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        let span = u64::from(high - low) + 1;
        // Lemire multiply-shift onto [0, span).
        let offset = ((u128::from(self.next_u64()) * u128::from(span)) >> 64) as u32;
        low + offset
    }
}

/// Replays a fixed list of draws, in order. Panics when the script runs out, which in
/// tests means the code under test drew more factors than expected.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    draws: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl DamageRng for ScriptedRng {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        let value = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("scripted rng exhausted while rolling {low}..={high}"));
        assert!(
            (low..=high).contains(&value),
            "scripted draw {value} outside {low}..={high}"
        );
        value
    }
}
