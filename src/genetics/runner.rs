//! Evolution loop execution.
//!
//! [`EvolutionRunner`] drives a [`Genepool`] through its lifecycle:
//! populate → (stopping check → select → crossover → mutate → add → prune)* → best.

use super::types::{Fitness, Gene, Genepool};

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<G> {
    /// The pool's best gene at exit.
    pub best: G,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Total offspring handed to the pool.
    pub offspring: usize,

    /// Generations whose crossover produced no offspring.
    pub barren_generations: usize,
}

/// Executes the evolution loop.
///
/// The runner holds no state and makes no decisions: every policy belongs to
/// the pool and its genes. Contract calls happen one at a time in a fixed
/// order, and a panic from any of them propagates unchanged.
///
/// # Usage
///
/// ```ignore
/// let mut pool = MyPool::new();
/// let result = EvolutionRunner::run(&mut pool);
/// println!("best fitness {} after {} generations", result.best_fitness, result.generations);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the pool to termination and reports what happened.
    ///
    /// Per generation, while [`Genepool::stopping_criteria_met`] is `false`:
    ///
    /// 1. [`Genepool::select_genes`] picks two parents
    /// 2. [`Gene::crossover`] produces offspring
    /// 3. [`Gene::mutate`] runs on each offspring in order
    /// 4. [`Genepool::add_genes`] takes all offspring in one call
    /// 5. [`Genepool::prune`] applies the retention policy
    ///
    /// Makes the same contract calls as [`evolve`], plus one [`Gene::fitness`]
    /// on the returned best to fill [`EvolutionResult::best_fitness`].
    pub fn run<P: Genepool>(pool: &mut P) -> EvolutionResult<P::Gene> {
        let (best, counts) = drive(pool);
        let best_fitness = best.fitness();
        tracing::info!(best_fitness, "best gene scored");

        EvolutionResult {
            best,
            best_fitness,
            generations: counts.generations,
            offspring: counts.offspring,
            barren_generations: counts.barren_generations,
        }
    }
}

/// Evolves `pool` until its stopping criteria hold and returns its best gene.
///
/// The bare loop: no gene is ever scored here.
pub fn evolve<P: Genepool>(pool: &mut P) -> P::Gene {
    drive(pool).0
}

#[derive(Default)]
struct RunCounts {
    generations: usize,
    offspring: usize,
    barren_generations: usize,
}

fn drive<P: Genepool>(pool: &mut P) -> (P::Gene, RunCounts) {
    pool.populate();
    tracing::info!("genepool populated");

    let mut counts = RunCounts::default();

    while !pool.stopping_criteria_met() {
        let (first, second) = pool.select_genes();
        let mut brood = first.crossover(second);
        for gene in brood.iter_mut() {
            gene.mutate();
        }

        let produced = brood.len();
        pool.add_genes(brood);
        pool.prune();

        counts.generations += 1;
        counts.offspring += produced;
        if produced == 0 {
            counts.barren_generations += 1;
        }
        tracing::trace!(generation = counts.generations, offspring = produced, "generation complete");
    }

    tracing::info!(
        generations = counts.generations,
        offspring = counts.offspring,
        "evolution finished"
    );
    (pool.bssf(), counts)
}

// ============================================================================
// Tests
// ============================================================================
