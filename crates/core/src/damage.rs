use crate::{Card, Rank};

/// Damage used whenever the rank cannot be resolved.
pub const FALLBACK_DAMAGE: u8 = 1;

pub fn damage_for(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 1,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Joker => 0,
    }
}

/// Damage for a raw store label. Unknown labels never block the popup; they
/// score [`FALLBACK_DAMAGE`].
pub fn damage_for_label(label: &str) -> u8 {
    Rank::from_label(label)
        .map(damage_for)
        .unwrap_or(FALLBACK_DAMAGE)
}

/// Damage shown for the current attacker, if any.
pub fn damage_points(card: Option<&Card>) -> u8 {
    card.map(|card| damage_for(card.rank)).unwrap_or(FALLBACK_DAMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    macro_rules! damage_case {
        ($name:ident, $rank:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(damage_for($rank), $expected);
                assert_eq!(damage_for_label($rank.label()), $expected);
            }
        };
    }

    damage_case!(ace_hits_for_one, Rank::Ace, 1);
    damage_case!(two_hits_for_two, Rank::Two, 2);
    damage_case!(three_hits_for_three, Rank::Three, 3);
    damage_case!(four_hits_for_four, Rank::Four, 4);
    damage_case!(five_hits_for_five, Rank::Five, 5);
    damage_case!(six_hits_for_six, Rank::Six, 6);
    damage_case!(seven_hits_for_seven, Rank::Seven, 7);
    damage_case!(eight_hits_for_eight, Rank::Eight, 8);
    damage_case!(nine_hits_for_nine, Rank::Nine, 9);
    damage_case!(ten_hits_for_ten, Rank::Ten, 10);
    damage_case!(jack_hits_for_ten, Rank::Jack, 10);
    damage_case!(queen_hits_for_ten, Rank::Queen, 10);
    damage_case!(king_hits_for_ten, Rank::King, 10);
    damage_case!(joker_hits_for_zero, Rank::Joker, 0);

    #[test]
    fn unknown_labels_fall_back_to_one() {
        assert_eq!(damage_for_label("11"), FALLBACK_DAMAGE);
        assert_eq!(damage_for_label(""), FALLBACK_DAMAGE);
        assert_eq!(damage_for_label("ZERO"), FALLBACK_DAMAGE);
    }

    #[test]
    fn missing_attacker_falls_back_to_one() {
        assert_eq!(damage_points(None), FALLBACK_DAMAGE);
        let card = Card::new(Rank::Joker, Suit::Clubs);
        assert_eq!(damage_points(Some(&card)), 0);
    }
}
