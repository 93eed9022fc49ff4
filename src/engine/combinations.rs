//! Ленивый генератор сочетаний C(n, k) без повторений.
//!
//! Не материализует все сочетания: держит только текущий набор индексов.
//! Порядок лексикографический по индексам, каждое сочетание выдаётся ровно один раз.

/// Биномиальный коэффициент C(n, k) (0, если k > n).
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        // Деление всегда нацело: acc * (n - i) кратно (i + 1).
        acc = acc * (n - i) as u64 / (i + 1) as u64;
    }
    acc
}

/// Итератор по k-сочетаниям элементов `items`.
#[derive(Clone, Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T: Copy> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            started: false,
            done: k > items.len(),
        }
    }

    /// Сколько всего сочетаний выдаст генератор с начала.
    pub fn total(&self) -> u64 {
        binomial(self.items.len(), self.indices.len())
    }

    /// Начать перебор заново.
    pub fn reset(&mut self) {
        let k = self.indices.len();
        for (i, idx) in self.indices.iter_mut().enumerate() {
            *idx = i;
        }
        self.started = false;
        self.done = k > self.items.len();
    }

    /// Сдвинуть индексы на следующее сочетание. false — перебор окончен.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();

        // Ищем самый правый индекс, который ещё можно увеличить.
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.indices[i] < n - k + i {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl<'a, T: Copy> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| self.items[i]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(45, 2), 990);
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn yields_each_combination_once_and_restarts() {
        let items = [1, 2, 3, 4, 5];
        let mut combos = Combinations::new(&items, 3);
        let first: Vec<Vec<i32>> = combos.by_ref().collect();
        assert_eq!(first.len() as u64, combos.total());
        assert_eq!(first[0], vec![1, 2, 3]);
        assert_eq!(first[9], vec![3, 4, 5]);

        combos.reset();
        let second: Vec<Vec<i32>> = combos.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_sized_combination_is_single_empty_set() {
        let items = [1, 2];
        let all: Vec<Vec<i32>> = Combinations::new(&items, 0).collect();
        assert_eq!(all, vec![Vec::<i32>::new()]);
    }
}
