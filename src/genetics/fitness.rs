//! Fitness ordering.
//!
//! A [`Genepool`](super::Genepool) picks one convention for "better" and
//! applies it to every gene it compares. [`FitnessOrder`] captures that
//! choice so selection, pruning and best-so-far tracking agree on it.

use super::types::{Fitness, Gene};
use std::cmp::Ordering;

/// Direction in which fitness improves.
///
/// # Examples
///
/// ```
/// use u_genepool::genetics::FitnessOrder;
///
/// assert!(FitnessOrder::Maximize.is_better(5, 3));
/// assert!(FitnessOrder::Minimize.is_better(3, 5));
/// assert!(!FitnessOrder::Minimize.is_better(3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessOrder {
    /// Higher fitness is better.
    #[default]
    Maximize,

    /// Lower fitness is better.
    Minimize,
}

impl FitnessOrder {
    /// Compares two scores.
    ///
    /// [`Ordering::Greater`] means `a` is better than `b`.
    pub fn compare(self, a: Fitness, b: Fitness) -> Ordering {
        match self {
            FitnessOrder::Maximize => a.cmp(&b),
            FitnessOrder::Minimize => b.cmp(&a),
        }
    }

    /// Returns `true` if `candidate` strictly beats `incumbent`.
    pub fn is_better(self, candidate: Fitness, incumbent: Fitness) -> bool {
        self.compare(candidate, incumbent) == Ordering::Greater
    }

    /// Finds the best gene, keeping the first one seen on ties.
    ///
    /// Returns `None` for an empty iterator.
    pub fn best<'a, G, I>(self, genes: I) -> Option<&'a G>
    where
        G: Gene + 'a,
        I: IntoIterator<Item = &'a G>,
    {
        let mut best: Option<(&'a G, Fitness)> = None;
        for gene in genes {
            let fitness = gene.fitness();
            match best {
                Some((_, incumbent)) if !self.is_better(fitness, incumbent) => {}
                _ => best = Some((gene, fitness)),
            }
        }
        best.map(|(gene, _)| gene)
    }

    /// Sorts genes best first. Stable, so equal genes keep their order.
    pub fn sort_best_first<G: Gene>(self, genes: &mut [G]) {
        genes.sort_by(|a, b| self.compare(b.fitness(), a.fitness()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        value: i64,
        tag: &'static str,
    }

    impl Gene for Tagged {
        fn crossover(&self, _other: &Self) -> Vec<Self> {
            Vec::new()
        }

        fn fitness(&self) -> Fitness {
            self.value
        }

        fn mutate(&mut self) {}
    }

    fn tagged(value: i64, tag: &'static str) -> Tagged {
        Tagged { value, tag }
    }

    #[test]
    fn test_default_is_maximize() {
        assert_eq!(FitnessOrder::default(), FitnessOrder::Maximize);
    }

    #[test]
    fn test_compare() {
        assert_eq!(FitnessOrder::Maximize.compare(2, 1), Ordering::Greater);
        assert_eq!(FitnessOrder::Minimize.compare(2, 1), Ordering::Less);
        assert_eq!(FitnessOrder::Minimize.compare(7, 7), Ordering::Equal);
    }

    #[test]
    fn test_extreme_values() {
        assert!(FitnessOrder::Maximize.is_better(i64::MAX, i64::MIN));
        assert!(FitnessOrder::Minimize.is_better(i64::MIN, i64::MAX));
    }

    #[test]
    fn test_best_empty() {
        let genes: Vec<Tagged> = Vec::new();
        assert!(FitnessOrder::Maximize.best(&genes).is_none());
    }

    #[test]
    fn test_best_keeps_first_on_tie() {
        let genes = vec![tagged(1, "a"), tagged(5, "b"), tagged(5, "c"), tagged(2, "d")];

        let best = FitnessOrder::Maximize.best(&genes).unwrap();
        assert_eq!(best.tag, "b");

        let best = FitnessOrder::Minimize.best(&genes).unwrap();
        assert_eq!(best.tag, "a");
    }

    #[test]
    fn test_sort_best_first() {
        let mut genes = vec![tagged(3, "a"), tagged(1, "b"), tagged(3, "c"), tagged(2, "d")];

        FitnessOrder::Maximize.sort_best_first(&mut genes);
        let tags: Vec<_> = genes.iter().map(|g| g.tag).collect();
        assert_eq!(tags, vec!["a", "c", "d", "b"]);

        FitnessOrder::Minimize.sort_best_first(&mut genes);
        let tags: Vec<_> = genes.iter().map(|g| g.tag).collect();
        assert_eq!(tags, vec!["b", "d", "a", "c"]);
    }
}
