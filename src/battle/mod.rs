pub mod error;
pub mod resolver;
pub mod rng;
pub mod weapon;

pub use error::BattleError;
pub use resolver::{
    decide_winner, resolve_round, roll_damage, validate_names, validate_weapons, Combatant,
    CombatantInput, RoundResult, Winner, MAX_NAME_CHARS,
};
pub use rng::{DamageRng, Rng, ScriptedRng};
pub use weapon::{UnknownWeapon, WeaponKind, WeaponSelection};
