//! Round resolution: validate both sides, roll damage, compare.
//!
//! Every function here is pure apart from the random draws, which come from the caller's
//! [`DamageRng`]. Scoring, narration and the history log live with the caller.

use serde::{Deserialize, Serialize};

use super::error::BattleError;
use super::rng::DamageRng;
use super::weapon::{WeaponKind, WeaponSelection};

pub const MAX_NAME_CHARS: usize = 10;

/// Raw presentation-layer state for one side: the text box and the radio group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombatantInput {
    pub name: String,
    pub selection: WeaponSelection,
}

impl CombatantInput {
    pub fn new(name: impl Into<String>, selection: WeaponSelection) -> Self {
        Self {
            name: name.into(),
            selection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub weapon: WeaponKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "side", content = "name", rename_all = "snake_case")]
pub enum Winner {
    Hero(String),
    Villain(String),
    Tie,
}

impl Winner {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Hero(name) | Self::Villain(name) => Some(name),
            Self::Tie => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Self::Tie)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub hero: Combatant,
    pub hero_damage: u32,
    pub villain: Combatant,
    pub villain_damage: u32,
    pub winner: Winner,
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_name_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn trim_name(raw: &str) -> &str {
    raw.trim_matches(is_name_padding)
}

/// Trims both names; fails on an empty name before checking for an overlong one.
pub fn validate_names(
    raw_hero_name: &str,
    raw_villain_name: &str,
) -> Result<(String, String), BattleError> {
    let hero = trim_name(raw_hero_name);
    let villain = trim_name(raw_villain_name);

    if hero.is_empty() || villain.is_empty() {
        return Err(BattleError::NameTooShort);
    }
    if hero.chars().count() > MAX_NAME_CHARS || villain.chars().count() > MAX_NAME_CHARS {
        return Err(BattleError::NameTooLong);
    }
    Ok((hero.to_string(), villain.to_string()))
}

pub fn validate_weapons(
    hero_selection: WeaponSelection,
    villain_selection: WeaponSelection,
) -> Result<(WeaponKind, WeaponKind), BattleError> {
    match (hero_selection.weapon(), villain_selection.weapon()) {
        (Some(hero), Some(villain)) => Ok((hero, villain)),
        _ => Err(BattleError::WeaponNotChosen),
    }
}

pub fn roll_damage<R: DamageRng + ?Sized>(weapon: WeaponKind, rng: &mut R) -> u32 {
    weapon.roll(rng)
}

/// Strictly more damage wins; anything else is a tie.
pub fn decide_winner(
    hero_name: &str,
    hero_damage: u32,
    villain_name: &str,
    villain_damage: u32,
) -> Winner {
    if hero_damage > villain_damage {
        Winner::Hero(hero_name.to_string())
    } else if villain_damage > hero_damage {
        Winner::Villain(villain_name.to_string())
    } else {
        Winner::Tie
    }
}

/// Names are checked before weapons; the hero's damage is rolled before the villain's.
pub fn resolve_round<R: DamageRng + ?Sized>(
    hero: &CombatantInput,
    villain: &CombatantInput,
    rng: &mut R,
) -> Result<RoundResult, BattleError> {
    let (hero_name, villain_name) = validate_names(&hero.name, &villain.name)?;
    let (hero_weapon, villain_weapon) = validate_weapons(hero.selection, villain.selection)?;

    let hero_damage = roll_damage(hero_weapon, rng);
    let villain_damage = roll_damage(villain_weapon, rng);
    let winner = decide_winner(&hero_name, hero_damage, &villain_name, villain_damage);

    Ok(RoundResult {
        hero: Combatant {
            name: hero_name,
            weapon: hero_weapon,
        },
        hero_damage,
        villain: Combatant {
            name: villain_name,
            weapon: villain_weapon,
        },
        villain_damage,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::{Rng, ScriptedRng};

    #[test]
    fn names_are_trimmed_but_otherwise_preserved() {
        let names = validate_names("  Zed ", "\tRoc de Lux").expect("valid names");
        assert_eq!(names, ("Zed".to_string(), "Roc de Lux".to_string()));
    }

    #[test]
    fn short_check_wins_over_long_check() {
        assert_eq!(
            validate_names("", "WayTooLongAName"),
            Err(BattleError::NameTooShort)
        );
    }

    #[test]
    fn separator_controls_are_trimmed_like_whitespace() {
        assert_eq!(
            validate_names("\u{1c}\u{1d}\u{1e}\u{1f}", "Roc"),
            Err(BattleError::NameTooShort)
        );
        let names = validate_names("\u{1f}Zed\u{1c} ", "Roc").expect("valid names");
        assert_eq!(names.0, "Zed");
    }

    #[test]
    fn name_length_counts_characters() {
        assert!(validate_names("ÉéÉéÉéÉéÉé", "Roc").is_ok());
    }

    #[test]
    fn weapons_require_both_sides() {
        assert_eq!(
            validate_weapons(WeaponSelection::None, WeaponSelection::Bow),
            Err(BattleError::WeaponNotChosen)
        );
        assert_eq!(
            validate_weapons(WeaponSelection::SpellBook, WeaponSelection::Sword),
            Ok((WeaponKind::SpellBook, WeaponKind::Sword))
        );
    }

    #[test]
    fn rolls_first_factor_then_second() {
        let mut rng = ScriptedRng::new([7, 3]);
        assert_eq!(roll_damage(WeaponKind::Sword, &mut rng), 21);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn failed_round_draws_nothing() {
        let mut rng = ScriptedRng::new([]);
        let hero = CombatantInput::new("Zed", WeaponSelection::Sword);
        let villain = CombatantInput::new("Roc", WeaponSelection::None);
        assert_eq!(
            resolve_round(&hero, &villain, &mut rng),
            Err(BattleError::WeaponNotChosen)
        );
    }

    #[test]
    fn seeded_rounds_are_reproducible() {
        let hero = CombatantInput::new("Zed", WeaponSelection::SpellBook);
        let villain = CombatantInput::new("Roc", WeaponSelection::Bow);
        let a = resolve_round(&hero, &villain, &mut Rng::new(11)).expect("round resolves");
        let b = resolve_round(&hero, &villain, &mut Rng::new(11)).expect("round resolves");
        assert_eq!(a, b);
    }

    #[test]
    fn winner_serializes_with_side_tag() {
        let json = serde_json::to_value(Winner::Villain("Roc".to_string())).expect("serialize");
        assert_eq!(json, serde_json::json!({"side": "villain", "name": "Roc"}));
        let tie = serde_json::to_value(Winner::Tie).expect("serialize");
        assert_eq!(tie, serde_json::json!({"side": "tie"}));
    }
}
