//! Разбор строк ввода сессии.
//!
//! Строка состояния — токены через пробел:
//!   - группы карт: `As 6c` или склеенно `As6cAd` (регистр не важен);
//!   - целое число — количество оппонентов;
//!   - дробное число (`12.5`, `40.`) — размер банка.
//!
//! Строка истории — куски через `;`: состояние i собирается из кусков 1..=i.
//! Промежуточные состояния с неполной улицей пропускаются, последнее обязано быть валидным.

use crate::domain::card::{parse_cards, Card};
use crate::engine::errors::InputError;
use crate::engine::hand_history::GameState;
use crate::engine::validation::{validate_known_cards, validate_opponents};

/// Вид токена строки ввода.
#[derive(Clone, Debug, PartialEq)]
enum Token {
    Cards(Vec<Card>),
    Opponents(u8),
    Pot(f64),
}

fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// `\d+(\.(\d+)?)?` с обязательной точкой.
fn is_decimal(token: &str) -> bool {
    match token.split_once('.') {
        Some((int, frac)) => is_integer(int) && (frac.is_empty() || is_integer(frac)),
        None => false,
    }
}

fn classify_token(token: &str) -> Result<Token, InputError> {
    if is_integer(token) {
        let n: u8 = token
            .parse()
            .map_err(|_| InputError::OpponentsOutOfRange(u8::MAX))?;
        return Ok(Token::Opponents(validate_opponents(n)?));
    }
    if is_decimal(token) {
        let pot: f64 = token
            .parse()
            .map_err(|_| InputError::MalformedLine(token.to_string()))?;
        return Ok(Token::Pot(pot));
    }
    parse_cards(token)
        .map(Token::Cards)
        .map_err(|_| InputError::MalformedLine(token.to_string()))
}

/// Синтаксическая проверка: каждый токен — карты или число.
pub fn validate_line(line: &str) -> bool {
    line.replace(';', " ")
        .split_whitespace()
        .all(|t| is_integer(t) || is_decimal(t) || parse_cards(t).is_ok())
}

/// Разобрать одну строку в состояние раздачи.
///
/// Если в строке нет числа оппонентов, берётся `default_opponents`.
pub fn parse_state_line(line: &str, default_opponents: u8) -> Result<GameState, InputError> {
    let mut cards = Vec::new();
    let mut opponents = default_opponents;
    let mut pot = None;

    for token in line.split_whitespace() {
        match classify_token(token)? {
            Token::Cards(group) => cards.extend(group),
            Token::Opponents(n) => opponents = n,
            Token::Pot(p) => pot = Some(p),
        }
    }

    let known = validate_known_cards(&cards)?;
    let opponents = validate_opponents(opponents)?;
    Ok(GameState::new(known.all().to_vec(), opponents, pot))
}

/// Разобрать строку истории: "As 6c; Ad 8s Ac 12.5; 6d".
pub fn parse_history_line(line: &str, default_opponents: u8) -> Result<Vec<GameState>, InputError> {
    let chunks: Vec<&str> = line
        .split(';')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    if chunks.is_empty() {
        return Err(InputError::MalformedLine(line.to_string()));
    }

    let mut states = Vec::with_capacity(chunks.len());
    for i in 1..chunks.len() {
        match parse_state_line(&chunks[..i].join(" "), default_opponents) {
            Ok(state) => states.push(state),
            // Улица ещё не собрана целиком ("As 6c; Ad; 8s Ac").
            Err(InputError::WrongCardCount(_)) => {}
            Err(err) => return Err(err),
        }
    }
    states.push(parse_state_line(&chunks.join(" "), default_opponents)?);
    Ok(states)
}
