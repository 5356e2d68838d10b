use std::fmt;

use serde::{Deserialize, Serialize};

use crate::battle::{BattleError, CombatantInput, DamageRng, UnknownWeapon, WeaponSelection};
use crate::history::{HistoryError, HistorySink};
use crate::scoreboard::ScoreBoard;
use crate::session::{RoundReport, Session, SessionError};

/// Form state for one round. Missing names are treated as blank, and a missing or null
/// weapon as nothing selected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FightRequest {
    #[serde(default)]
    pub hero_name: String,
    #[serde(default)]
    pub hero_weapon: Option<String>,
    #[serde(default)]
    pub villain_name: String,
    #[serde(default)]
    pub villain_weapon: Option<String>,
}

impl FightRequest {
    fn into_inputs(self) -> Result<(CombatantInput, CombatantInput), UnknownWeapon> {
        let selection = |raw: Option<String>| {
            raw.as_deref()
                .map(WeaponSelection::parse)
                .unwrap_or(Ok(WeaponSelection::None))
        };
        let hero = CombatantInput::new(self.hero_name, selection(self.hero_weapon)?);
        let villain = CombatantInput::new(self.villain_name, selection(self.villain_weapon)?);
        Ok((hero, villain))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FightResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub report: RoundReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedResponse {
    pub status: &'static str,
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum FightPayloadError {
    Parse(serde_json::Error),
    Encode(serde_json::Error),
    UnknownWeapon(UnknownWeapon),
    Rejected(BattleError),
    History(HistoryError),
}

impl fmt::Display for FightPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) | Self::Encode(err) => write!(f, "{err}"),
            Self::UnknownWeapon(err) => write!(f, "{err}"),
            Self::Rejected(err) => write!(f, "{err}"),
            Self::History(err) => write!(f, "{err}"),
        }
    }
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "heroes-vs",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn scoreboard_payload(scoreboard: &ScoreBoard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scoreboard)
}

pub fn rejected_payload(err: BattleError) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&RejectedResponse {
        status: "rejected",
        code: err.code(),
        message: err.to_string(),
    })
}

pub fn fight_payload<H: HistorySink, R: DamageRng>(
    session: &mut Session<H, R>,
    body: &str,
) -> Result<String, FightPayloadError> {
    let request: FightRequest = serde_json::from_str(body).map_err(FightPayloadError::Parse)?;
    let (hero, villain) = request
        .into_inputs()
        .map_err(FightPayloadError::UnknownWeapon)?;

    let report = session.fight(&hero, &villain).map_err(|err| match err {
        SessionError::Battle(err) => FightPayloadError::Rejected(err),
        SessionError::History(err) => FightPayloadError::History(err),
    })?;

    serde_json::to_string_pretty(&FightResponse {
        status: "ok",
        report,
    })
    .map_err(FightPayloadError::Encode)
}
