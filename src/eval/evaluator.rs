use crate::domain::card::{Card, Rank};

use super::hand_rank::{EvaluationResult, HandCategory};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Детектор одной категории: предикат + извлечение рангов тай-брейка.
type Detector = fn(&FiveCardProfile) -> Option<EvaluationResult>;

/// Цепочка детекторов в порядке приоритета (сильнейшая категория первой).
///
/// Этот порядок и есть кодировка правил старшинства комбинаций:
/// первый сработавший детектор определяет категорию. Переставлять нельзя.
const DETECTORS: [(HandCategory, Detector); 9] = [
    (HandCategory::StraightFlush, detect_straight_flush),
    (HandCategory::FourOfAKind, detect_four_of_a_kind),
    (HandCategory::FullHouse, detect_full_house),
    (HandCategory::Flush, detect_flush),
    (HandCategory::Straight, detect_plain_straight),
    (HandCategory::ThreeOfAKind, detect_three_of_a_kind),
    (HandCategory::TwoPair, detect_two_pair),
    (HandCategory::OnePair, detect_one_pair),
    (HandCategory::HighCard, detect_high_card),
];

/// Главная функция: классифицировать 5–7 карт.
///
/// Для 6–7 карт перебираются все C(n,5) пятёрок и возвращается лучшая.
///
/// Меньше пяти карт — нарушение контракта вызывающего (паника), а не ошибка рантайма.
pub fn classify(cards: &[Card]) -> EvaluationResult {
    assert!(
        (5..=7).contains(&cards.len()),
        "classify ожидает от 5 до 7 карт, получено {}",
        cards.len()
    );

    best_of_all_5card_combinations(cards)
}

/// Лучшая 5-карточная рука из hole + board.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> EvaluationResult {
    let mut all_cards = [hole[0]; 7];
    let n = hole.len() + board.len();
    assert!(n <= 7, "evaluate_best_hand ожидает не более 7 карт");
    all_cards[..hole.len()].copy_from_slice(hole);
    all_cards[hole.len()..n].copy_from_slice(board);

    classify(&all_cards[..n])
}

/// Перебираем все комбинации 5 карт из N (N=5–7) и выбираем лучшую.
fn best_of_all_5card_combinations(cards: &[Card]) -> EvaluationResult {
    let n = cards.len();
    let mut best: Option<EvaluationResult> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = evaluate_5card_hand(&five);
                        if best.map_or(true, |best_r| r > best_r) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }

    // n >= 5 проверено выше, хотя бы одна пятёрка всегда есть.
    best.unwrap_or_else(|| evaluate_5card_hand(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Оценка строго 5-карточной комбинации: прогоняем цепочку детекторов.
pub fn evaluate_5card_hand(cards: &[Card; 5]) -> EvaluationResult {
    let profile = FiveCardProfile::new(cards);
    DETECTORS
        .iter()
        .find_map(|(_, detect)| detect(&profile))
        // HighCard срабатывает всегда — сюда не попадём.
        .unwrap_or_else(|| profile.ranks_desc().into_result(HandCategory::HighCard))
}

/// Предпосчитанные свойства пятёрки карт, общие для всех детекторов.
struct FiveCardProfile {
    /// Группы одинаковых рангов: (количество, ранг),
    /// отсортированы по количеству (desc), затем по рангу (desc).
    groups: [(u8, Rank); 5],
    group_len: usize,
    is_flush: bool,
    straight_high: Option<Rank>,
}

impl FiveCardProfile {
    fn new(cards: &[Card; 5]) -> Self {
        let mut rank_counts = [0u8; 15]; // индексы 2..14
        let mut rank_mask: RankMask = 0;
        let first_suit = cards[0].suit;
        let mut is_flush = true;

        for card in cards {
            rank_counts[card.rank as usize] += 1;
            rank_mask |= rank_to_bit(card.rank);
            is_flush &= card.suit == first_suit;
        }

        let mut groups = [(0u8, Rank::Two); 5];
        let mut group_len = 0;
        for rank in Rank::ALL.iter().rev() {
            let count = rank_counts[*rank as usize];
            if count > 0 {
                groups[group_len] = (count, *rank);
                group_len += 1;
            }
        }
        // Ранги уже по убыванию; стабильная сортировка по количеству их сохраняет.
        groups[..group_len].sort_by(|a, b| b.0.cmp(&a.0));

        Self {
            groups,
            group_len,
            is_flush,
            straight_high: detect_straight(rank_mask),
        }
    }

    /// Шаблон группировки: [4,1], [3,2], [2,2,1] ...
    fn pattern(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups[..self.group_len].iter().map(|g| g.0)
    }

    fn is_pattern(&self, expected: &[u8]) -> bool {
        self.group_len == expected.len() && self.pattern().eq(expected.iter().copied())
    }

    /// Ранги групп в порядке значимости.
    fn group_ranks(&self) -> RankBuf {
        let mut buf = RankBuf::default();
        for &(_, rank) in &self.groups[..self.group_len] {
            buf.push(rank);
        }
        buf
    }

    /// Все пять рангов по убыванию (с повторами).
    fn ranks_desc(&self) -> RankBuf {
        let mut buf = RankBuf::default();
        for &(count, rank) in &self.groups[..self.group_len] {
            for _ in 0..count {
                buf.push(rank);
            }
        }
        buf.ranks[..buf.len].sort_by(|a, b| b.cmp(a));
        buf
    }
}

/// Буфер на пять рангов без аллокаций.
struct RankBuf {
    ranks: [Rank; 5],
    len: usize,
}

impl Default for RankBuf {
    fn default() -> Self {
        Self {
            ranks: [Rank::Two; 5],
            len: 0,
        }
    }
}

impl RankBuf {
    fn push(&mut self, rank: Rank) {
        if self.len < 5 {
            self.ranks[self.len] = rank;
            self.len += 1;
        }
    }

    fn into_result(self, category: HandCategory) -> EvaluationResult {
        EvaluationResult::new(category, &self.ranks[..self.len])
    }
}

fn detect_straight_flush(p: &FiveCardProfile) -> Option<EvaluationResult> {
    match (p.is_flush, p.straight_high) {
        (true, Some(high)) => Some(EvaluationResult::new(HandCategory::StraightFlush, &[high])),
        _ => None,
    }
}

fn detect_four_of_a_kind(p: &FiveCardProfile) -> Option<EvaluationResult> {
    p.is_pattern(&[4, 1])
        .then(|| p.group_ranks().into_result(HandCategory::FourOfAKind))
}

fn detect_full_house(p: &FiveCardProfile) -> Option<EvaluationResult> {
    p.is_pattern(&[3, 2])
        .then(|| p.group_ranks().into_result(HandCategory::FullHouse))
}

fn detect_flush(p: &FiveCardProfile) -> Option<EvaluationResult> {
    p.is_flush
        .then(|| p.ranks_desc().into_result(HandCategory::Flush))
}

fn detect_plain_straight(p: &FiveCardProfile) -> Option<EvaluationResult> {
    p.straight_high
        .map(|high| EvaluationResult::new(HandCategory::Straight, &[high]))
}

fn detect_three_of_a_kind(p: &FiveCardProfile) -> Option<EvaluationResult> {
    p.is_pattern(&[3, 1, 1])
        .then(|| p.group_ranks().into_result(HandCategory::ThreeOfAKind))
}

fn detect_two_pair(p: &FiveCardProfile) -> Option<EvaluationResult> {
    p.is_pattern(&[2, 2, 1])
        .then(|| p.group_ranks().into_result(HandCategory::TwoPair))
}

fn detect_one_pair(p: &FiveCardProfile) -> Option<EvaluationResult> {
    p.is_pattern(&[2, 1, 1, 1])
        .then(|| p.group_ranks().into_result(HandCategory::OnePair))
}

fn detect_high_card(p: &FiveCardProfile) -> Option<EvaluationResult> {
    Some(p.ranks_desc().into_result(HandCategory::HighCard))
}
