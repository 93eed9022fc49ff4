use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Недетерминированный RNG: сидируется из энтропии ОС при создании.
///
/// Каждый воркер сэмплера создаёт свой экземпляр, общего состояния нет.
#[derive(Clone, Debug)]
pub struct SystemRng {
    inner: StdRng,
}

impl Default for SystemRng {
    fn default() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SystemRng {
    fn partial_shuffle<'a, T>(&mut self, slice: &'a mut [T], amount: usize) -> &'a mut [T] {
        slice.partial_shuffle(&mut self.inner, amount).0
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Детерминированный RNG для тестов и воспроизводимых прогонов.
/// Одинаковый seed → одинаковая последовательность выборок.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Независимый поток для воркера `worker` при общем базовом seed.
    pub fn for_worker(seed: u64, worker: usize) -> Self {
        // splitmix64-шаг, чтобы соседние воркеры не получали близкие seed'ы.
        let mut x = seed ^ (worker as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::from_seed(x ^ (x >> 31))
    }
}

impl RandomSource for DeterministicRng {
    fn partial_shuffle<'a, T>(&mut self, slice: &'a mut [T], amount: usize) -> &'a mut [T] {
        slice.partial_shuffle(&mut self.inner, amount).0
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
