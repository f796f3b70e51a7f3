///
/// Combinations
///
/// Every `k`-subset of `0..n` as ascending index lists, in lexicographic
/// order: `[0,1] [0,2] [1,2]` for `n = 3, k = 2`.
///

pub(crate) struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    // Advance to the next subset, or report exhaustion.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }

        Some(self.indices.clone())
    }
}

/// All non-empty subsets of `0..n`, smaller subsets first, each size in
/// lexicographic order.
pub(crate) fn non_empty_subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..=n).flat_map(move |k| Combinations::new(n, k))
}
