//! История раздачи: продолжение состояния и сброс стека.

use poker_odds::domain::parse_cards_line;
use poker_odds::engine::{GameState, HistoryStack};

fn state(line: &str, opponents: u8, pot: Option<f64>) -> GameState {
    GameState::new(parse_cards_line(line).unwrap(), opponents, pot)
}

#[test]
fn next_street_is_a_successor() {
    let preflop = state("As 6c", 4, Some(3.0));
    let flop = state("As 6c Ad 8s Ac", 3, Some(10.0));

    assert!(flop.is_successor(&preflop));
    assert!(!preflop.is_successor(&flop));
}

#[test]
fn identical_state_is_not_a_successor() {
    let a = state("As 6c Ad 8s Ac", 3, None);
    assert!(!a.is_successor(&a.clone()));
}

#[test]
fn successor_conditions() {
    let prev = state("As 6c Ad 8s Ac", 3, Some(10.0));

    // Другие карманные карты.
    assert!(!state("Ks 6c Ad 8s Ac 2d", 3, Some(10.0)).is_successor(&prev));
    // Банк уменьшился.
    assert!(!state("As 6c Ad 8s Ac 2d", 3, Some(5.0)).is_successor(&prev));
    // Оппонентов стало больше.
    assert!(!state("As 6c Ad 8s Ac 2d", 4, Some(10.0)).is_successor(&prev));
    // Тот же борд, но изменился банк — всё ещё продолжение.
    assert!(state("As 6c Ad 8s Ac", 3, Some(20.0)).is_successor(&prev));
}

#[test]
fn missing_pot_counts_as_zero() {
    let prev = state("As 6c", 4, None);
    assert!(state("As 6c Ad 8s Ac", 4, Some(1.0)).is_successor(&prev));

    let prev = state("As 6c", 4, Some(1.0));
    assert!(!state("As 6c Ad 8s Ac", 4, None).is_successor(&prev));
}

#[test]
fn stack_grows_along_one_hand() {
    let mut history = HistoryStack::new();
    assert!(history.is_empty());
    assert!(history.top().is_none());

    history.push(state("As 6c", 4, None));
    history.push(state("As 6c Ad 8s Ac", 3, Some(10.0)));
    history.push(state("As 6c Ad 8s Ac 6d", 2, Some(25.0)));

    assert_eq!(history.len(), 3);
    assert_eq!(history.top().unwrap().opponents(), 2);
}

#[test]
fn stack_resets_on_new_hand() {
    let mut history = HistoryStack::new();
    history.push(state("As 6c", 4, None));
    history.push(state("As 6c Ad 8s Ac", 4, None));

    let new_hand = state("Kd Qd", 4, None);
    history.push(new_hand.clone());

    assert_eq!(history.len(), 1);
    assert_eq!(history.states(), &[new_hand]);
}

#[test]
fn repeated_state_resets_stack() {
    let mut history = HistoryStack::new();
    let s = state("As 6c", 4, None);
    history.push(s.clone());
    history.push(s.clone());
    assert_eq!(history.len(), 1);
}
