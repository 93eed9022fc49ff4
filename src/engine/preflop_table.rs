//! Префлоп-таблица шансов по форме стартовой руки.
//!
//! Значения — исторические проценты выигрыша и ничьей против
//! `BASELINE_OPPONENTS` случайных рук при полном доборе борда.

use crate::domain::card::Rank;
use crate::engine::lookup::HoleShape;

/// Против скольких оппонентов посчитана таблица.
pub const BASELINE_OPPONENTS: u8 = 4;

/// Сетка 13×13, строки и столбцы: A, K, Q, ..., 2.
///
/// Над диагональю — одномастные руки (строка — старшая карта),
/// под диагональю — разномастные (столбец — старшая карта), на диагонали — пары.
/// Значение: (win %, tie %).
#[rustfmt::skip]
const GRID: [[(f64, f64); 13]; 13] = [
    /* A */ [(55.78, 0.58), (34.91, 2.00), (32.27, 2.20), (30.55, 2.79), (28.91, 2.85), (26.94, 3.04), (26.14, 3.20), (24.43, 3.77), (23.33, 3.45), (24.02, 3.78), (23.41, 3.73), (23.46, 3.67), (22.32, 3.42)],
    /* K */ [(31.49, 2.13), (49.79, 0.66), (32.03, 1.98), (30.02, 2.62), (28.59, 2.79), (25.27, 2.88), (23.91, 2.92), (22.86, 3.21), (22.17, 3.38), (21.49, 3.55), (20.75, 3.29), (20.66, 3.45), (20.03, 3.17)],
    /* Q */ [(29.23, 2.38), (28.45, 2.12), (44.59, 0.77), (28.61, 2.50), (27.85, 2.74), (25.38, 2.85), (22.88, 3.06), (20.79, 3.05), (20.59, 3.25), (19.68, 3.23), (19.55, 3.13), (19.23, 3.00), (18.50, 2.88)],
    /* J */ [(27.46, 2.76), (26.32, 2.69), (25.77, 2.65), (39.90, 0.83), (27.15, 2.86), (25.33, 2.60), (23.23, 2.81), (21.00, 3.21), (19.54, 2.90), (18.57, 3.00), (18.38, 3.14), (17.29, 3.17), (17.52, 2.77)],
    /* T */ [(25.91, 3.00), (24.74, 2.98), (24.90, 2.73), (24.09, 2.75), (35.99, 0.84), (25.26, 2.81), (22.45, 2.81), (20.88, 3.15), (19.09, 3.02), (17.66, 2.92), (17.03, 2.96), (17.01, 2.64), (16.11, 2.75)],
    /* 9 */ [(23.72, 3.43), (22.00, 3.02), (21.59, 2.81), (21.59, 2.79), (21.30, 3.03), (32.08, 0.91), (22.88, 2.88), (20.79, 2.83), (19.51, 2.73), (17.27, 3.12), (16.02, 2.94), (15.65, 2.66), (15.73, 2.58)],
    /* 8 */ [(21.59, 3.50), (20.24, 3.31), (19.06, 3.27), (18.82, 2.91), (18.65, 3.15), (19.14, 2.60), (28.94, 0.82), (21.32, 2.72), (18.64, 2.84), (17.87, 2.63), (16.45, 2.54), (15.29, 2.60), (14.71, 2.50)],
    /* 7 */ [(20.64, 3.67), (19.18, 3.25), (17.48, 3.10), (16.98, 3.33), (16.57, 3.08), (17.30, 2.95), (16.84, 2.85), (26.59, 0.71), (19.31, 2.85), (17.68, 2.64), (16.84, 2.65), (15.29, 2.48), (14.26, 2.35)],
    /* 6 */ [(19.21, 3.83), (17.51, 3.52), (16.36, 3.20), (15.04, 3.17), (15.51, 3.27), (15.46, 2.88), (15.88, 2.75), (15.82, 2.71), (24.61, 0.92), (18.74, 2.65), (16.91, 2.69), (16.04, 2.40), (14.64, 2.16)],
    /* 5 */ [(20.01, 4.27), (16.73, 3.64), (15.80, 3.48), (14.38, 3.17), (13.04, 3.25), (13.19, 3.02), (13.74, 2.80), (13.89, 2.83), (14.42, 2.78), (22.05, 0.74), (17.74, 2.69), (16.76, 2.31), (14.96, 2.33)],
    /* 4 */ [(19.62, 3.98), (16.64, 3.85), (15.28, 3.12), (13.78, 3.32), (13.13, 3.17), (12.11, 3.02), (12.24, 2.75), (12.49, 2.81), (13.37, 2.64), (13.96, 2.62), (20.29, 0.80), (15.66, 2.35), (14.07, 2.02)],
    /* 3 */ [(19.41, 3.85), (15.84, 3.42), (14.38, 3.10), (12.88, 3.23), (12.56, 2.98), (11.22, 3.03), (10.74, 2.73), (11.12, 2.58), (11.88, 2.52), (12.58, 2.46), (11.69, 2.40), (18.64, 0.70), (14.35, 1.80)],
    /* 2 */ [(18.27, 3.61), (15.50, 3.35), (13.86, 3.23), (12.76, 2.75), (11.76, 3.04), (10.64, 2.52), (10.12, 2.69), ( 9.52, 2.48), ( 9.81, 2.19), (10.86, 2.40), (10.73, 2.12), ( 9.84, 1.99), (17.93, 0.67)],
];

fn grid_index(rank: Rank) -> usize {
    (Rank::Ace.value() - rank.value()) as usize
}

/// (win %, tie %) для формы руки.
pub fn lookup(shape: HoleShape) -> (f64, f64) {
    match shape {
        HoleShape::Pair(r) => GRID[grid_index(r)][grid_index(r)],
        HoleShape::Suited { high, low } => GRID[grid_index(high)][grid_index(low)],
        HoleShape::Offsuit { high, low } => GRID[grid_index(low)][grid_index(high)],
    }
}
