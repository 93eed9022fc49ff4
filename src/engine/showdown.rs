use crate::engine::outcome::{Outcome, OutcomeAccumulator};
use crate::eval::EvaluationResult;

/// Вердикт шоудауна: герой против лучшей из рук оппонентов.
///
/// - Win: герой строго сильнее каждого оппонента;
/// - Tie: герой равен сильнейшему оппоненту (значит, не хуже остальных);
/// - Loss: иначе.
pub fn showdown_verdict(hero: EvaluationResult, best_opponent: EvaluationResult) -> Outcome {
    match hero.cmp(&best_opponent) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Equal => Outcome::Tie,
        std::cmp::Ordering::Less => Outcome::Loss,
    }
}

/// Сыграть шоудаун и сразу записать его в накопитель.
///
/// `opponents` не должен быть пустым: оппонентов всегда ≥ 1.
pub fn record_showdown<I>(acc: &mut OutcomeAccumulator, hero: EvaluationResult, opponents: I)
where
    I: IntoIterator<Item = EvaluationResult>,
{
    if let Some(best) = opponents.into_iter().max() {
        let outcome = showdown_verdict(hero, best);
        acc.record(outcome, hero.category(), best.category());
    }
}
