use serde::{Deserialize, Serialize};

use crate::eval::HandCategory;

/// Исход одной раздачи для героя.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Доля категории среди выигрышей (или проигрышей).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: HandCategory,
    pub count: u64,
    /// count / (сумма по всем категориям этой разбивки), 0..=1.
    pub share: f64,
}

/// Накопитель статистики исходов.
///
/// Инварианты:
/// - win + tie + loss == total;
/// - сумма `won_with` == win;
/// - сумма `lost_to` == loss.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeAccumulator {
    total: u64,
    win: u64,
    tie: u64,
    loss: u64,
    /// Категория руки героя в выигранных раздачах (индекс — `HandCategory::index`).
    won_with: [u64; HandCategory::COUNT],
    /// Категория лучшей руки оппонента в проигранных раздачах.
    lost_to: [u64; HandCategory::COUNT],
}

impl OutcomeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Учесть одну раздачу.
    pub fn record(
        &mut self,
        outcome: Outcome,
        hero_category: HandCategory,
        opponent_best_category: HandCategory,
    ) {
        self.total += 1;
        match outcome {
            Outcome::Win => {
                self.win += 1;
                self.won_with[hero_category.index()] += 1;
            }
            Outcome::Tie => self.tie += 1,
            Outcome::Loss => {
                self.loss += 1;
                self.lost_to[opponent_best_category.index()] += 1;
            }
        }
    }

    /// Слить частичный накопитель (от другого воркера) в этот: поле к полю.
    pub fn merge(mut self, other: OutcomeAccumulator) -> OutcomeAccumulator {
        self.absorb(&other);
        self
    }

    pub fn absorb(&mut self, other: &OutcomeAccumulator) {
        self.total += other.total;
        self.win += other.win;
        self.tie += other.tie;
        self.loss += other.loss;
        for i in 0..HandCategory::COUNT {
            self.won_with[i] += other.won_with[i];
            self.lost_to[i] += other.lost_to[i];
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn wins(&self) -> u64 {
        self.win
    }

    pub fn ties(&self) -> u64 {
        self.tie
    }

    pub fn losses(&self) -> u64 {
        self.loss
    }

    pub fn won_with(&self, category: HandCategory) -> u64 {
        self.won_with[category.index()]
    }

    pub fn lost_to(&self, category: HandCategory) -> u64 {
        self.lost_to[category.index()]
    }

    /// Доля выигрышей (0, если раздач не было).
    pub fn win_rate(&self) -> f64 {
        ratio(self.win, self.total)
    }

    pub fn tie_rate(&self) -> f64 {
        ratio(self.tie, self.total)
    }

    pub fn loss_rate(&self) -> f64 {
        ratio(self.loss, self.total)
    }

    /// n самых частых категорий, с которыми герой выигрывал.
    pub fn top_won_with_categories(&self, n: usize) -> Vec<CategoryShare> {
        top_categories(&self.won_with, n)
    }

    /// n самых частых категорий рук, которыми героя обыгрывали.
    pub fn top_lost_to_categories(&self, n: usize) -> Vec<CategoryShare> {
        top_categories(&self.lost_to, n)
    }

    /// Проверка инвариантов (для тестов и отладочных assert'ов).
    pub fn is_consistent(&self) -> bool {
        self.win + self.tie + self.loss == self.total
            && self.won_with.iter().sum::<u64>() == self.win
            && self.lost_to.iter().sum::<u64>() == self.loss
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Топ-n ненулевых категорий по частоте.
/// При равной частоте выше стоит более сильная категория.
fn top_categories(counts: &[u64; HandCategory::COUNT], n: usize) -> Vec<CategoryShare> {
    let sum: u64 = counts.iter().sum();

    let mut entries: Vec<(HandCategory, u64)> = HandCategory::BY_PRIORITY
        .iter()
        .map(|&c| (c, counts[c.index()]))
        .filter(|&(_, count)| count > 0)
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    entries.truncate(n);

    entries
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            count,
            share: ratio(count, sum),
        })
        .collect()
}
