use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Пять младших бит подряд — "окно" стрита.
const WINDOW: RankMask = 0b1_1111;

/// Маска стрита A2345 (wheel): туз играет снизу.
pub const WHEEL_MASK: RankMask = (1 << 12) | 0b1111;

/// Маски всех стритов от слабейшего к сильнейшему.
///
/// Индекс 0 — wheel (старшая карта Five), индекс 9 — broadway (Ace).
/// Индекс i ≥ 1 — окно из пяти бит, начинающееся с ранга (i + 1).
pub const STRAIGHT_MASKS: [RankMask; 10] = build_straight_masks();

const fn build_straight_masks() -> [RankMask; 10] {
    let mut masks = [0 as RankMask; 10];
    masks[0] = WHEEL_MASK;
    let mut i = 1;
    while i < 10 {
        masks[i] = WINDOW << (i - 1);
        i += 1;
    }
    masks
}

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank as u8 - 2)
}

/// Построить маску из списка рангов.
pub fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    ranks.iter().fold(0, |m, &r| m | rank_to_bit(r))
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: wheel (A2345) → Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // От broadway к wheel: первый найденный — самый сильный.
    STRAIGHT_MASKS
        .iter()
        .enumerate()
        .rev()
        .find(|&(_, &sm)| rank_mask & sm == sm)
        .and_then(|(i, _)| Rank::from_value(i as u8 + 5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_are_five_bits_each() {
        for m in STRAIGHT_MASKS {
            assert_eq!(m.count_ones(), 5);
        }
        assert_eq!(STRAIGHT_MASKS[9], mask_from_ranks(&[
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]));
    }

    #[test]
    fn wheel_high_card_is_five() {
        assert_eq!(detect_straight(WHEEL_MASK), Some(Rank::Five));
        // A23456: играет стрит до шестёрки, а не wheel.
        let mask = mask_from_ranks(&[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
        ]);
        assert_eq!(detect_straight(mask), Some(Rank::Six));
    }
}
