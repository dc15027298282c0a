//! Generation bookkeeping for stopping decisions.
//!
//! The evolution loop keeps no state of its own, so a genepool that wants
//! generation limits, stagnation detection, a target score or a time limit
//! embeds a [`GenerationTracker`] and consults it from
//! [`stopping_criteria_met`](super::Genepool::stopping_criteria_met).

use super::config::{ConfigError, StoppingConfig};
use super::fitness::FitnessOrder;
use super::types::Fitness;
use std::time::{Duration, Instant};

/// Which criterion ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The best-so-far reached the target fitness.
    TargetReached,

    /// `max_generations` generations were recorded.
    MaxGenerations,

    /// The best-so-far did not improve for `stagnation_limit` generations.
    Stagnation,

    /// The wall-clock limit elapsed.
    TimeLimit,
}

/// Tracks generations, the best fitness and stagnation for a genepool.
///
/// # Usage
///
/// ```
/// use u_genepool::genetics::{FitnessOrder, GenerationTracker, StopReason, StoppingConfig};
///
/// let config = StoppingConfig::default()
///     .with_max_generations(2)
///     .with_stagnation_limit(0);
/// let mut tracker = GenerationTracker::new(config, FitnessOrder::Maximize).unwrap();
///
/// tracker.start(1);
/// assert!(!tracker.is_met());
/// tracker.record_generation(3);
/// tracker.record_generation(3);
/// assert_eq!(tracker.stop_reason(), Some(StopReason::MaxGenerations));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationTracker {
    config: StoppingConfig,
    order: FitnessOrder,
    started: Instant,
    generation: usize,
    best_fitness: Option<Fitness>,
    stagnation: usize,
}

impl GenerationTracker {
    /// Creates a tracker after validating `config`.
    pub fn new(config: StoppingConfig, order: FitnessOrder) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            order,
            started: Instant::now(),
            generation: 0,
            best_fitness: None,
            stagnation: 0,
        })
    }

    /// Restarts tracking from a freshly seeded population.
    ///
    /// Resets the clock, the generation counter and the stagnation counter.
    pub fn start(&mut self, initial_best: Fitness) {
        self.started = Instant::now();
        self.generation = 0;
        self.best_fitness = Some(initial_best);
        self.stagnation = 0;
    }

    /// Records one finished generation and the pool's best fitness after it.
    ///
    /// Only a strict improvement resets the stagnation counter.
    pub fn record_generation(&mut self, best: Fitness) {
        self.generation += 1;
        match self.best_fitness {
            Some(incumbent) if !self.order.is_better(best, incumbent) => {
                self.stagnation += 1;
            }
            _ => {
                self.best_fitness = Some(best);
                self.stagnation = 0;
            }
        }
    }

    /// Returns the first criterion that currently holds, if any.
    pub fn stop_reason(&self) -> Option<StopReason> {
        if let (Some(target), Some(best)) = (self.config.target_fitness, self.best_fitness) {
            if !self.order.is_better(target, best) {
                return Some(StopReason::TargetReached);
            }
        }
        if self.generation >= self.config.max_generations {
            return Some(StopReason::MaxGenerations);
        }
        if self.config.stagnation_limit > 0 && self.stagnation >= self.config.stagnation_limit {
            return Some(StopReason::Stagnation);
        }
        if let Some(ms) = self.config.time_limit_ms {
            if self.elapsed() >= Duration::from_millis(ms) {
                return Some(StopReason::TimeLimit);
            }
        }
        None
    }

    /// Returns `true` if any criterion holds.
    pub fn is_met(&self) -> bool {
        match self.stop_reason() {
            Some(reason) => {
                tracing::debug!(?reason, generation = self.generation, "stopping criteria met");
                true
            }
            None => false,
        }
    }

    /// Number of generations recorded since the last [`start`](Self::start).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness recorded so far.
    pub fn best_fitness(&self) -> Option<Fitness> {
        self.best_fitness
    }

    /// Consecutive generations without improvement.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// Time since the last [`start`](Self::start) (or construction).
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The validated stopping configuration.
    pub fn config(&self) -> &StoppingConfig {
        &self.config
    }

    /// Fitness direction used for improvement and target checks.
    pub fn order(&self) -> FitnessOrder {
        self.order
    }
}
