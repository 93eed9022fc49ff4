//! Инфраструктурный слой вокруг движка оценки шансов:
//! - RNG-реализации для сэмплера.

pub mod rng;

pub use rng::*;
