//! Evolution loop over pluggable genepools.
//!
//! A generic, domain-agnostic driver built on two trait contracts. Users
//! supply a population by implementing [`Genepool`] and a solution
//! representation by implementing [`Gene`]; [`evolve`] does the rest.
//!
//! # Core Traits
//!
//! - [`Gene`]: A candidate solution that can crossover, score and mutate itself
//! - [`Genepool`]: The population and its seeding, selection, pruning and stopping policy
//!
//! # Key Types
//!
//! - [`EvolutionRunner`]: Executes the evolution loop
//! - [`EvolutionResult`]: Best gene plus run statistics
//! - [`StoppingConfig`]: Generation, stagnation, target and time limits
//! - [`GenerationTracker`]: Bookkeeping a pool embeds to apply a [`StoppingConfig`]
//! - [`FitnessOrder`]: Whether higher or lower fitness is better
//!
//! # Lifecycle
//!
//! ```text
//! populate ─▶ stopping_criteria_met? ──yes──▶ bssf
//!                   │ no          ▲
//!                   ▼             │
//!   select_genes ─▶ crossover ─▶ mutate* ─▶ add_genes ─▶ prune
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod runner;
mod termination;
mod types;

pub use config::{ConfigError, StoppingConfig};
pub use fitness::FitnessOrder;
pub use runner::{evolve, EvolutionResult, EvolutionRunner};
pub use termination::{GenerationTracker, StopReason};
pub use types::{Fitness, Gene, Genepool};
