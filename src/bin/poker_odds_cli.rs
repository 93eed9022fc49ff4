// src/bin/poker_odds_cli.rs
//
// Dev-CLI: читает команды со stdin и печатает оценку шансов.
//
//   eval As 6c Ad 8s Ac 2      — selector сам выбирает оценщик
//   exact / sample / lookup …  — принудительно конкретный оценщик
//   opponents 3                — оппонентов по умолчанию
//   budget 1000                — бюджет сэмплера в мс
//   json on|off                — печатать DTO в JSON
//   history                    — показать историю текущей раздачи
//   quit
//
// Строка без команды трактуется как `eval`.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use poker_odds::api::{build_estimate_dto, parse_history_line, validate_line, ApiError, EstimateDto};
use poker_odds::config::{OddsConfig, SampleBudget};
use poker_odds::domain::Stage;
use poker_odds::engine::selector::cards_to_enumerate;
use poker_odds::engine::{validate_known_cards, EstimatorKind, EstimatorSelector, HistoryStack};

struct Session {
    config: OddsConfig,
    history: HistoryStack,
    json: bool,
}

fn main() {
    env_logger::init();

    println!("poker_odds_cli: вводите карты (например `As 6c Ad 8s Ac 2`), `quit` для выхода");

    let mut session = Session {
        config: OddsConfig::default(),
        history: HistoryStack::new(),
        json: false,
    };

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }
        if !line.is_empty() {
            handle_line(&mut session, line);
        }
        prompt();
    }
}

fn prompt() {
    print!("(odds) ");
    let _ = io::stdout().flush();
}

fn handle_line(session: &mut Session, line: &str) {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "eval" => run(session, rest, None),
        "exact" | "brute_force" => run(session, rest, Some(EstimatorKind::ExactEnumerator)),
        "sample" | "monte_carlo" => run(session, rest, Some(EstimatorKind::RandomSampler)),
        "lookup" | "look_up" => run(session, rest, Some(EstimatorKind::TableLookup)),
        "opponents" => match rest.trim().parse::<u8>() {
            Ok(n) => {
                let config = OddsConfig {
                    default_opponents: n,
                    ..session.config
                };
                if apply_config(session, config) {
                    println!("оппонентов по умолчанию: {n}");
                }
            }
            Err(_) => println!("ожидается число 1..=9"),
        },
        "budget" => match rest.trim().parse::<u64>() {
            Ok(ms) => {
                let trials = session.config.budget.max_trials;
                let config = session.config.with_budget(SampleBudget::new(trials, ms));
                if apply_config(session, config) {
                    println!("бюджет сэмплера: {ms} мс / {trials} раздач");
                }
            }
            Err(_) => println!("ожидается число миллисекунд"),
        },
        "json" => {
            session.json = rest.trim() != "off";
            println!("json: {}", session.json);
        }
        "history" => print_history(session),
        _ if validate_line(line) => run(session, line, None),
        _ => println!("Неизвестная команда или синтаксис: '{line}'"),
    }
}

/// Принять новую конфигурацию сессии, только если она валидна.
fn apply_config(session: &mut Session, config: OddsConfig) -> bool {
    match config.validate() {
        Ok(()) => {
            session.config = config;
            true
        }
        Err(err) => {
            println!("Ошибка: {err}");
            false
        }
    }
}

fn run(session: &mut Session, line: &str, forced: Option<EstimatorKind>) {
    if let Err(err) = try_run(session, line, forced) {
        println!("Ошибка: {err:?}");
    }
}

fn try_run(session: &mut Session, line: &str, forced: Option<EstimatorKind>) -> Result<(), ApiError> {
    let states = parse_history_line(line, session.config.default_opponents)?;
    let Some(state) = states.last().cloned() else {
        return Ok(());
    };

    let known = validate_known_cards(state.cards())?;
    let opponents = state.opponents();
    let selector = EstimatorSelector::from_config(&session.config);
    let kind = forced.unwrap_or_else(|| selector.select(opponents, known.all().len()));

    // Принудительный перебор за порогом может идти часами.
    let stage = known.stage();
    if kind == EstimatorKind::ExactEnumerator
        && matches!(stage, Stage::Turn | Stage::River)
        && !selector.exact_is_feasible(stage, opponents)
    {
        println!(
            "Перебор слишком велик: {} неизвестных карт при пороге {}, используйте `sample`",
            cards_to_enumerate(stage, opponents),
            selector.exact_card_limit
        );
        return Ok(());
    }

    session.history.push(state);

    let started = Instant::now();
    let estimate = kind.run(opponents, &known, &session.config)?;
    let dto = build_estimate_dto(&known, opponents, kind, &estimate);

    if session.json {
        match serde_json::to_string_pretty(&dto) {
            Ok(s) => println!("{s}"),
            Err(e) => println!("Ошибка сериализации: {e}"),
        }
    } else {
        print_estimate(&dto);
    }
    println!("Готово за {:.2} сек", started.elapsed().as_secs_f64());
    Ok(())
}

fn print_estimate(dto: &EstimateDto) {
    println!();
    println!(
        "[{}] {} | оппонентов: {}",
        dto.estimator,
        dto.stage.name(),
        dto.opponents
    );
    if let Some(hand) = &dto.current_hand {
        println!("Рука: {} ({})", hand.description, hand.ranks.join(" "));
    }

    match (dto.wins, dto.ties, dto.losses) {
        (Some(w), Some(t), Some(l)) => println!(
            "Win {:.2}% ({}) | Tie {:.2}% ({}) | Loss {:.2}% ({})",
            dto.win_pct, w, dto.tie_pct, t, dto.loss_pct, l
        ),
        _ => println!(
            "Win {:.2}% | Tie {:.2}% | Loss {:.2}%",
            dto.win_pct, dto.tie_pct, dto.loss_pct
        ),
    }

    for s in &dto.won_with {
        println!("  выигрыш с {:<16} {:6.2}%", s.category.name(), s.pct);
    }
    for s in &dto.lost_to {
        println!("  проигрыш от {:<16} {:6.2}%", s.category.name(), s.pct);
    }
}

fn print_history(session: &Session) {
    if session.history.is_empty() {
        println!("История пуста");
        return;
    }
    for (i, state) in session.history.states().iter().enumerate() {
        let cards: Vec<String> = state.cards().iter().map(|c| c.unicode()).collect();
        let pot = state
            .pot()
            .map(|p| format!(" | банк {p:.2}"))
            .unwrap_or_default();
        println!(
            "{}. {} | оппонентов: {}{}",
            i + 1,
            cards.join(" "),
            state.opponents(),
            pot
        );
    }
}
