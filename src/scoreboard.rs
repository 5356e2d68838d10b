use serde::Serialize;

use crate::battle::{RoundResult, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

/// Session win/loss counters for the hero and villain seats. Lives as long as the
/// session that owns it; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBoard {
    pub hero: Tally,
    pub villain: Tally,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board after `result`. Ties leave every counter unchanged.
    #[must_use]
    pub fn with_round(self, result: &RoundResult) -> Self {
        let mut next = self;
        match result.winner {
            Winner::Hero(_) => {
                next.hero.wins += 1;
                next.villain.losses += 1;
            }
            Winner::Villain(_) => {
                next.villain.wins += 1;
                next.hero.losses += 1;
            }
            Winner::Tie => {}
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{Combatant, WeaponKind};

    fn result(winner: Winner) -> RoundResult {
        RoundResult {
            hero: Combatant {
                name: "Zed".to_string(),
                weapon: WeaponKind::Sword,
            },
            hero_damage: 10,
            villain: Combatant {
                name: "Zed".to_string(),
                weapon: WeaponKind::Bow,
            },
            villain_damage: 5,
            winner,
        }
    }

    #[test]
    fn hero_win_updates_both_sides() {
        let board = ScoreBoard::new().with_round(&result(Winner::Hero("Zed".to_string())));
        assert_eq!(board.hero, Tally { wins: 1, losses: 0 });
        assert_eq!(board.villain, Tally { wins: 0, losses: 1 });
    }

    #[test]
    fn villain_win_is_scored_by_side_even_with_shared_names() {
        let board = ScoreBoard::new().with_round(&result(Winner::Villain("Zed".to_string())));
        assert_eq!(board.villain.wins, 1);
        assert_eq!(board.hero.losses, 1);
        assert_eq!(board.hero.wins, 0);
    }

    #[test]
    fn tie_changes_nothing() {
        let start = ScoreBoard {
            hero: Tally { wins: 2, losses: 1 },
            villain: Tally { wins: 1, losses: 2 },
        };
        assert_eq!(start.with_round(&result(Winner::Tie)), start);
    }
}
