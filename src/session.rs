//! A play session: one scoreboard, one history sink, one random source.

use serde::Serialize;
use thiserror::Error;

use crate::battle::{resolve_round, BattleError, CombatantInput, DamageRng, RoundResult};
use crate::history::{HistoryError, HistoryRecord, HistorySink};
use crate::narration::describe_round;
use crate::scoreboard::ScoreBoard;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Input rejected; nothing was rolled, logged or scored.
    #[error(transparent)]
    Battle(#[from] BattleError),

    /// Round resolved but could not be logged, so it was not scored either.
    #[error(transparent)]
    History(#[from] HistoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub result: RoundResult,
    pub message: String,
    pub scoreboard: ScoreBoard,
}

pub struct Session<H, R> {
    scoreboard: ScoreBoard,
    history: H,
    rng: R,
}

impl<H: HistorySink, R: DamageRng> Session<H, R> {
    pub fn new(history: H, rng: R) -> Self {
        Self {
            scoreboard: ScoreBoard::new(),
            history,
            rng,
        }
    }

    pub fn scoreboard(&self) -> ScoreBoard {
        self.scoreboard
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Resolves, logs, then scores one round.
    pub fn fight(
        &mut self,
        hero: &CombatantInput,
        villain: &CombatantInput,
    ) -> Result<RoundReport, SessionError> {
        let result = match resolve_round(hero, villain, &mut self.rng) {
            Ok(result) => result,
            Err(err) => {
                tracing::info!(reason = err.code(), "round rejected");
                return Err(err.into());
            }
        };

        self.history.append(&HistoryRecord::from(&result))?;
        self.scoreboard = self.scoreboard.with_round(&result);

        tracing::info!(
            hero = %result.hero.name,
            hero_weapon = %result.hero.weapon,
            hero_damage = result.hero_damage,
            villain = %result.villain.name,
            villain_weapon = %result.villain.weapon,
            villain_damage = result.villain_damage,
            winner = result.winner.name().unwrap_or("tie"),
            "round resolved"
        );

        Ok(RoundReport {
            message: describe_round(&result),
            scoreboard: self.scoreboard,
            result,
        })
    }
}
