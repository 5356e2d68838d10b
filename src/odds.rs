//! Matchup odds: many independent damage exchanges between two weapons, run in parallel.
//!
//! Each batch draws from its own stream derived from `(seed, batch index)`, and the batch
//! count is fixed, so results do not depend on how many threads run them.

use rayon::prelude::*;
use serde::Serialize;

use crate::battle::{roll_damage, Rng, WeaponKind};
use crate::parallel::{batch_ranges, WorkerPool};

pub const ODDS_BATCHES: usize = 64;
pub const DEFAULT_ODDS_ROUNDS: u32 = 100_000;
pub const MAX_ODDS_ROUNDS: u32 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchupOdds {
    pub hero_weapon: WeaponKind,
    pub villain_weapon: WeaponKind,
    pub rounds: u32,
    pub seed: u64,
    pub hero_wins: u32,
    pub villain_wins: u32,
    pub ties: u32,
    pub hero_win_rate: f64,
    pub villain_win_rate: f64,
    pub tie_rate: f64,
    pub mean_hero_damage: f64,
    pub mean_villain_damage: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct BatchTotals {
    hero_wins: u32,
    villain_wins: u32,
    ties: u32,
    hero_damage: u64,
    villain_damage: u64,
}

impl BatchTotals {
    fn merge(self, other: Self) -> Self {
        Self {
            hero_wins: self.hero_wins + other.hero_wins,
            villain_wins: self.villain_wins + other.villain_wins,
            ties: self.ties + other.ties,
            hero_damage: self.hero_damage + other.hero_damage,
            villain_damage: self.villain_damage + other.villain_damage,
        }
    }
}

fn run_batch(hero: WeaponKind, villain: WeaponKind, rounds: usize, mut rng: Rng) -> BatchTotals {
    let mut totals = BatchTotals::default();
    for _ in 0..rounds {
        let hero_damage = roll_damage(hero, &mut rng);
        let villain_damage = roll_damage(villain, &mut rng);
        totals.hero_damage += u64::from(hero_damage);
        totals.villain_damage += u64::from(villain_damage);
        match hero_damage.cmp(&villain_damage) {
            std::cmp::Ordering::Greater => totals.hero_wins += 1,
            std::cmp::Ordering::Less => totals.villain_wins += 1,
            std::cmp::Ordering::Equal => totals.ties += 1,
        }
    }
    totals
}

fn ratio(part: u64, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / f64::from(whole)
    }
}

pub fn estimate_matchup(
    hero_weapon: WeaponKind,
    villain_weapon: WeaponKind,
    rounds: u32,
    seed: u64,
    pool: &WorkerPool,
) -> MatchupOdds {
    let ranges = batch_ranges(rounds as usize, ODDS_BATCHES);
    let totals = pool.install(|| {
        ranges
            .par_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                run_batch(
                    hero_weapon,
                    villain_weapon,
                    end - start,
                    Rng::for_stream(seed, index as u64),
                )
            })
            .reduce(BatchTotals::default, BatchTotals::merge)
    });

    tracing::debug!(%hero_weapon, %villain_weapon, rounds, seed, "matchup estimated");

    MatchupOdds {
        hero_weapon,
        villain_weapon,
        rounds,
        seed,
        hero_wins: totals.hero_wins,
        villain_wins: totals.villain_wins,
        ties: totals.ties,
        hero_win_rate: ratio(u64::from(totals.hero_wins), rounds),
        villain_win_rate: ratio(u64::from(totals.villain_wins), rounds),
        tie_rate: ratio(u64::from(totals.ties), rounds),
        mean_hero_damage: ratio(totals.hero_damage, rounds),
        mean_villain_damage: ratio(totals.villain_damage, rounds),
    }
}
