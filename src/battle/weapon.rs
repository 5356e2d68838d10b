use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rng::DamageRng;

pub const SWORD_LABEL: &str = "sword";
pub const BOW_LABEL: &str = "bow";
pub const SPELL_BOOK_LABEL: &str = "book o' spells";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    Sword,
    Bow,
    SpellBook,
}

/// Inclusive `(low, high)` bounds of the two damage factors multiplied together.
pub type DamageFactors = ((u32, u32), (u32, u32));

pub const SWORD_FACTORS: DamageFactors = ((2, 10), (2, 3));
pub const BOW_FACTORS: DamageFactors = ((1, 15), (1, 3));
pub const SPELL_BOOK_FACTORS: DamageFactors = ((2, 20), (0, 3));

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [Self::Sword, Self::Bow, Self::SpellBook];

    pub const fn factors(self) -> DamageFactors {
        match self {
            Self::Sword => SWORD_FACTORS,
            Self::Bow => BOW_FACTORS,
            Self::SpellBook => SPELL_BOOK_FACTORS,
        }
    }

    /// Label written to the history log.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sword => SWORD_LABEL,
            Self::Bow => BOW_LABEL,
            Self::SpellBook => SPELL_BOOK_LABEL,
        }
    }

    /// Smallest and largest damage this weapon can deal.
    pub const fn damage_bounds(self) -> (u32, u32) {
        let ((a_low, a_high), (b_low, b_high)) = self.factors();
        (a_low * b_low, a_high * b_high)
    }

    /// Draws the first factor, then the second, and multiplies them.
    pub fn roll<R: DamageRng + ?Sized>(self, rng: &mut R) -> u32 {
        let ((a_low, a_high), (b_low, b_high)) = self.factors();
        let first = rng.roll(a_low, a_high);
        let second = rng.roll(b_low, b_high);
        first * second
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeapon(pub String);

impl fmt::Display for UnknownWeapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weapon '{}'", self.0)
    }
}

impl std::error::Error for UnknownWeapon {}

impl FromStr for WeaponKind {
    type Err = UnknownWeapon;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            SWORD_LABEL => Ok(Self::Sword),
            BOW_LABEL => Ok(Self::Bow),
            SPELL_BOOK_LABEL | "book" | "spellbook" | "spell_book" | "spells" => {
                Ok(Self::SpellBook)
            }
            _ => Err(UnknownWeapon(raw.trim().to_string())),
        }
    }
}

impl Serialize for WeaponKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for WeaponKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One side's radio group: a weapon, or nothing picked yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeaponSelection {
    Sword,
    Bow,
    SpellBook,
    #[default]
    None,
}

impl WeaponSelection {
    pub const fn weapon(self) -> Option<WeaponKind> {
        match self {
            Self::Sword => Some(WeaponKind::Sword),
            Self::Bow => Some(WeaponKind::Bow),
            Self::SpellBook => Some(WeaponKind::SpellBook),
            Self::None => None,
        }
    }

    /// Parses a command-line or form value; `-`, `none` and empty mean nothing selected.
    pub fn parse(raw: &str) -> Result<Self, UnknownWeapon> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        trimmed.parse::<WeaponKind>().map(Self::from)
    }
}

impl From<WeaponKind> for WeaponSelection {
    fn from(weapon: WeaponKind) -> Self {
        match weapon {
            WeaponKind::Sword => Self::Sword,
            WeaponKind::Bow => Self::Bow,
            WeaponKind::SpellBook => Self::SpellBook,
        }
    }
}

impl From<Option<WeaponKind>> for WeaponSelection {
    fn from(weapon: Option<WeaponKind>) -> Self {
        weapon.map(Self::from).unwrap_or(Self::None)
    }
}
