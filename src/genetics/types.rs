//! Core trait definitions for the evolution loop.
//!
//! The two contracts, [`Gene`] and [`Genepool`], are everything the
//! loop knows about a problem. Concrete representations and every policy
//! around seeding, selection, pruning and termination live in their
//! implementations.

/// Integer fitness score of a [`Gene`].
///
/// Whether higher or lower is better is fixed by the [`Genepool`]
/// comparing the genes, see [`FitnessOrder`](super::FitnessOrder).
pub type Fitness = i64;

/// A candidate solution.
///
/// Each gene is an independent value once created. The loop never shares a
/// gene between owners: parents are lent out by the pool, offspring are owned
/// by the loop until they are handed to [`Genepool::add_genes`].
///
/// # Implementing
///
/// ```
/// use u_genepool::genetics::{Fitness, Gene};
///
/// #[derive(Clone, Debug)]
/// struct Value(i64);
///
/// impl Gene for Value {
///     fn crossover(&self, other: &Self) -> Vec<Self> {
///         vec![Value((self.0 + other.0 + 1) / 2)]
///     }
///
///     fn fitness(&self) -> Fitness {
///         self.0
///     }
///
///     fn mutate(&mut self) {}
/// }
/// ```
pub trait Gene: Sized {
    /// Combines this gene with `other` into zero or more offspring.
    ///
    /// Neither parent may change. Offspring order is kept all the way into
    /// [`Genepool::add_genes`].
    fn crossover(&self, other: &Self) -> Vec<Self>;

    /// Computes the fitness score.
    ///
    /// Must be deterministic and free of side effects.
    fn fitness(&self) -> Fitness;

    /// Perturbs the gene in place.
    ///
    /// Applied to every offspring right after crossover.
    fn mutate(&mut self);
}

/// The evolving collection of genes plus the policies that govern it.
///
/// The pool exclusively owns every gene it holds; a gene removed by
/// [`prune`](Genepool::prune) is gone as far as the loop is concerned.
///
/// # Contract
///
/// The loop trusts the pool and checks nothing. Implementations must uphold:
///
/// - [`populate`](Genepool::populate) leaves at least two genes, or panics.
/// - [`prune`](Genepool::prune) never leaves fewer than two genes while
///   [`stopping_criteria_met`](Genepool::stopping_criteria_met) is `false`.
///   [`select_genes`](Genepool::select_genes) on fewer than two genes is
///   unspecified and may panic.
/// - [`bssf`](Genepool::bssf) returns a gene that the pool really produced
///   (currently held, or held before being pruned), never a fabricated one.
pub trait Genepool {
    /// The gene type held by this pool.
    type Gene: Gene;

    /// Seeds the initial population.
    ///
    /// Called exactly once, before the first stopping check.
    fn populate(&mut self);

    /// Returns `true` when evolution should stop.
    ///
    /// Checked before every generation, including right after seeding.
    /// Must not change observable state.
    fn stopping_criteria_met(&self) -> bool;

    /// Picks two parents for the next crossover.
    fn select_genes(&mut self) -> (&Self::Gene, &Self::Gene);

    /// Takes ownership of freshly mutated offspring.
    ///
    /// An empty `Vec` is common (crossover may yield nothing) and must
    /// leave the pool untouched.
    fn add_genes(&mut self, genes: Vec<Self::Gene>);

    /// Applies the retention policy. Removing nothing is valid.
    fn prune(&mut self);

    /// Returns the best gene seen so far, by the pool's own ordering.
    ///
    /// Callable any time after [`populate`](Genepool::populate).
    fn bssf(&self) -> Self::Gene;
}
