//! Player-facing text for round outcomes and counters.

use crate::battle::{RoundResult, Winner};
use crate::scoreboard::{ScoreBoard, Tally};

pub fn describe_round(result: &RoundResult) -> String {
    let hero = &result.hero.name;
    let villain = &result.villain.name;
    match &result.winner {
        Winner::Hero(winner) | Winner::Villain(winner) => format!(
            "{hero} strikes {villain} for {} damage. {villain} strikes {hero} for {} damage. {winner} wins!",
            result.hero_damage, result.villain_damage
        ),
        Winner::Tie => format!(
            "What a twist! {hero} and {villain} both strike each other for {} damage. It's a tie!",
            result.hero_damage
        ),
    }
}

pub fn describe_tally(tally: Tally) -> (String, String) {
    (
        format!("Wins: {}", tally.wins),
        format!("Losses: {}", tally.losses),
    )
}

/// Two lines, hero first, e.g. `Zed  Wins: 1  Losses: 0`.
pub fn describe_scoreboard(board: &ScoreBoard, hero_name: &str, villain_name: &str) -> String {
    let (hero_wins, hero_losses) = describe_tally(board.hero);
    let (villain_wins, villain_losses) = describe_tally(board.villain);
    format!(
        "{hero_name}  {hero_wins}  {hero_losses}\n{villain_name}  {villain_wins}  {villain_losses}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{Combatant, WeaponKind};

    fn round(hd: u32, vd: u32, winner: Winner) -> RoundResult {
        RoundResult {
            hero: Combatant {
                name: "Zed".to_string(),
                weapon: WeaponKind::Sword,
            },
            hero_damage: hd,
            villain: Combatant {
                name: "Roc".to_string(),
                weapon: WeaponKind::Bow,
            },
            villain_damage: vd,
            winner,
        }
    }

    #[test]
    fn win_sentence_names_the_winner() {
        let text = describe_round(&round(20, 10, Winner::Hero("Zed".to_string())));
        assert_eq!(
            text,
            "Zed strikes Roc for 20 damage. Roc strikes Zed for 10 damage. Zed wins!"
        );
    }

    #[test]
    fn tie_sentence_uses_shared_damage() {
        let text = describe_round(&round(12, 12, Winner::Tie));
        assert_eq!(
            text,
            "What a twist! Zed and Roc both strike each other for 12 damage. It's a tie!"
        );
    }

    #[test]
    fn tally_labels() {
        let (wins, losses) = describe_tally(Tally { wins: 3, losses: 1 });
        assert_eq!(wins, "Wins: 3");
        assert_eq!(losses, "Losses: 1");
    }
}
