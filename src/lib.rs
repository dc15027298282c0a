//! Domain-agnostic evolution loop.
//!
//! The crate is the loop and the two contracts it orchestrates:
//!
//! - **Genepool**: owns the population and every policy around seeding,
//!   growth, pruning, parent selection and termination.
//! - **Gene**: one candidate solution; owns its crossover, fitness and
//!   mutation logic.
//!
//! [`genetics::evolve`] seeds the pool, then repeats select → crossover →
//! mutate → add → prune until the pool says stop, and returns the pool's
//! best-so-far gene. It never inspects a gene, caches fitness, or handles
//! errors; a panic from any contract call propagates unchanged.
//!
//! # Example
//!
//! ```
//! use u_genepool::genetics::{evolve, Fitness, FitnessOrder, Gene, Genepool};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Value(i64);
//!
//! impl Gene for Value {
//!     fn crossover(&self, other: &Self) -> Vec<Self> {
//!         vec![Value((self.0 + other.0 + 1).div_euclid(2))]
//!     }
//!     fn fitness(&self) -> Fitness {
//!         self.0
//!     }
//!     fn mutate(&mut self) {
//!         self.0 += 1;
//!     }
//! }
//!
//! struct Pool {
//!     genes: Vec<Value>,
//!     generation: usize,
//! }
//!
//! impl Genepool for Pool {
//!     type Gene = Value;
//!
//!     fn populate(&mut self) {
//!         self.genes = vec![Value(1), Value(2), Value(3), Value(4)];
//!     }
//!     fn stopping_criteria_met(&self) -> bool {
//!         self.generation >= 5
//!     }
//!     fn select_genes(&mut self) -> (&Value, &Value) {
//!         FitnessOrder::Maximize.sort_best_first(&mut self.genes);
//!         (&self.genes[0], &self.genes[1])
//!     }
//!     fn add_genes(&mut self, genes: Vec<Value>) {
//!         self.genes.extend(genes);
//!     }
//!     fn prune(&mut self) {
//!         FitnessOrder::Maximize.sort_best_first(&mut self.genes);
//!         self.genes.truncate(4);
//!         self.generation += 1;
//!     }
//!     fn bssf(&self) -> Value {
//!         *FitnessOrder::Maximize.best(&self.genes).unwrap()
//!     }
//! }
//!
//! let mut pool = Pool { genes: Vec::new(), generation: 0 };
//! let best = evolve(&mut pool);
//! assert!(best.fitness() >= 4);
//! ```

pub mod genetics;
