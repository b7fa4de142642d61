use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Partition plan for k-fold cross-validation. Every row index lands in
/// exactly one test fold; fold sizes differ by at most one, with the first
/// `rows % folds` folds taking the extra row.
#[derive(Clone, Debug)]
pub struct FoldPlan {
    folds: usize,
    shuffle_seed: Option<u64>,
}

impl FoldPlan {
    /// Deterministic contiguous blocking in original row order.
    pub fn contiguous(folds: usize) -> Self {
        Self {
            folds,
            shuffle_seed: None,
        }
    }

    /// Seeded permutation of the row order before blocking.
    pub fn shuffled(folds: usize, seed: u64) -> Self {
        Self {
            folds,
            shuffle_seed: Some(seed),
        }
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle_seed.is_some()
    }

    /// Generates the `(train, test)` index pair for every fold.
    pub fn split(&self, rows: usize) -> Vec<(Vec<usize>, Vec<usize>)> {
        let mut indices: Vec<usize> = (0..rows).collect();
        if let Some(seed) = self.shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            indices.shuffle(&mut rng);
        }

        let fold_size = rows / self.folds;
        let remainder = rows % self.folds;

        let mut splits = Vec::with_capacity(self.folds);
        let mut start = 0;
        for fold in 0..self.folds {
            let end = start + fold_size + usize::from(fold < remainder);
            let test: Vec<usize> = indices[start..end].to_vec();
            let train: Vec<usize> = indices[..start]
                .iter()
                .chain(indices[end..].iter())
                .copied()
                .collect();
            splits.push((train, test));
            start = end;
        }
        splits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(splits: &[(Vec<usize>, Vec<usize>)], rows: usize) {
        let mut seen = vec![0usize; rows];
        for (train, test) in splits {
            for &i in test {
                seen[i] += 1;
            }
            let mut in_test = vec![false; rows];
            for &i in test {
                in_test[i] = true;
            }
            assert_eq!(train.len() + test.len(), rows);
            assert!(train.iter().all(|&i| !in_test[i]));
        }
        assert!(seen.iter().all(|&c| c == 1), "each index held out exactly once");
    }

    #[test]
    fn every_index_held_out_exactly_once() {
        for (folds, rows) in [(2, 2), (2, 7), (3, 10), (5, 5), (10, 103)] {
            let splits = FoldPlan::contiguous(folds).split(rows);
            assert_eq!(splits.len(), folds);
            assert_exact_cover(&splits, rows);
        }
    }

    #[test]
    fn fold_sizes_differ_by_at_most_one() {
        let splits = FoldPlan::contiguous(4).split(10);
        let sizes: Vec<usize> = splits.iter().map(|(_, test)| test.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    fn contiguous_plan_keeps_original_row_order() {
        let splits = FoldPlan::contiguous(3).split(6);
        assert_eq!(splits[0].1, vec![0, 1]);
        assert_eq!(splits[1].1, vec![2, 3]);
        assert_eq!(splits[2].1, vec![4, 5]);
        assert_eq!(splits[1].0, vec![0, 1, 4, 5]);
    }

    #[test]
    fn shuffled_plan_still_covers_exactly_once() {
        let splits = FoldPlan::shuffled(4, 7).split(21);
        assert_exact_cover(&splits, 21);
    }

    #[test]
    fn shuffled_plan_is_reproducible_per_seed() {
        let a = FoldPlan::shuffled(3, 42).split(12);
        let b = FoldPlan::shuffled(3, 42).split(12);
        let c = FoldPlan::shuffled(3, 43).split(12);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
