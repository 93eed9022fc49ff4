use crate::domain::card::Card;
use crate::domain::hand::{KnownCards, Stage};
use crate::engine::errors::InputError;

/// Минимальное и максимальное число оппонентов.
pub const MIN_OPPONENTS: u8 = 1;
pub const MAX_OPPONENTS: u8 = 9;

/// Проверка количества оппонентов.
pub fn validate_opponents(opponents: u8) -> Result<u8, InputError> {
    if (MIN_OPPONENTS..=MAX_OPPONENTS).contains(&opponents) {
        Ok(opponents)
    } else {
        Err(InputError::OpponentsOutOfRange(opponents))
    }
}

/// Проверка известных карт: 2/5/6/7 штук и без повторов.
///
/// Первые две — карманные карты героя, дальше — борд в порядке сдачи.
pub fn validate_known_cards(cards: &[Card]) -> Result<KnownCards, InputError> {
    if Stage::from_known_count(cards.len()).is_none() {
        return Err(InputError::WrongCardCount(cards.len()));
    }

    let mut seen = 0u64;
    for card in cards {
        if seen & card.bit() != 0 {
            return Err(InputError::DuplicateCard(*card));
        }
        seen |= card.bit();
    }

    Ok(KnownCards::new_unchecked(cards.to_vec()))
}

/// Карманные карты + борд по отдельности (как их отдаёт слой представления).
pub fn validate_hand(hole: &[Card], community: &[Card]) -> Result<KnownCards, InputError> {
    if hole.len() != 2 {
        return Err(InputError::WrongCardCount(hole.len() + community.len()));
    }
    let mut all = Vec::with_capacity(hole.len() + community.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(community);
    validate_known_cards(&all)
}
