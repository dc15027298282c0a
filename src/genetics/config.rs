//! Stopping configuration.
//!
//! [`StoppingConfig`] holds the parameters a genepool can use to decide when
//! [`stopping_criteria_met`](super::Genepool::stopping_criteria_met) turns
//! `true`. The loop never reads it; pools feed it to a
//! [`GenerationTracker`](super::GenerationTracker).

use super::types::Fitness;
use thiserror::Error;

/// Invalid stopping configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_generations` was zero.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    /// `time_limit_ms` was `Some(0)`.
    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
}

/// When a genepool should stop evolving.
///
/// Every enabled criterion is checked; the first one that holds stops the run.
///
/// # Defaults
///
/// ```
/// use u_genepool::genetics::StoppingConfig;
///
/// let config = StoppingConfig::default();
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.stagnation_limit, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genepool::genetics::StoppingConfig;
///
/// let config = StoppingConfig::default()
///     .with_max_generations(1_000)
///     .with_stagnation_limit(0)
///     .with_target_fitness(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoppingConfig {
    /// Maximum number of generations. Always enforced, so a run terminates.
    pub max_generations: usize,

    /// Number of consecutive generations without a strictly better
    /// best-so-far before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Stop as soon as the best-so-far reaches this score or better.
    pub target_fitness: Option<Fitness>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked before each generation, so a run may overshoot by one
    /// generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for StoppingConfig {
    fn default() -> Self {
        Self {
            max_generations: 500,
            stagnation_limit: 50,
            target_fitness: None,
            time_limit_ms: None,
        }
    }
}

impl StoppingConfig {
    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the target fitness.
    pub fn with_target_fitness(mut self, target: Fitness) -> Self {
        self.target_fitness = Some(target);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick runs.
    ///
    /// - Generations: 100, Stagnation limit: 20, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            max_generations: 100,
            stagnation_limit: 20,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset trading quality against time.
    ///
    /// - Generations: 300, Stagnation limit: 50, Time limit: 30s
    pub fn balanced() -> Self {
        Self {
            max_generations: 300,
            stagnation_limit: 50,
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for long runs.
    ///
    /// - Generations: 500, Stagnation limit: 80, Time limit: 60s
    pub fn quality() -> Self {
        Self {
            max_generations: 500,
            stagnation_limit: 80,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoppingConfig::default();
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.stagnation_limit, 50);
        assert!(config.target_fitness.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = StoppingConfig::default()
            .with_max_generations(10)
            .with_stagnation_limit(3)
            .with_target_fitness(-7)
            .with_time_limit_ms(250);

        assert_eq!(config.max_generations, 10);
        assert_eq!(config.stagnation_limit, 3);
        assert_eq!(config.target_fitness, Some(-7));
        assert_eq!(config.time_limit_ms, Some(250));
    }

    #[test]
    fn test_validate_ok() {
        assert!(StoppingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = StoppingConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = StoppingConfig::default().with_time_limit_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ZeroGenerations.to_string(),
            "max_generations must be at least 1"
        );
        assert_eq!(
            ConfigError::ZeroTimeLimit.to_string(),
            "time_limit_ms must be positive or None"
        );
    }

    // ---- Presets ----

    #[test]
    fn test_presets() {
        let fast = StoppingConfig::fast();
        assert_eq!(fast.max_generations, 100);
        assert_eq!(fast.stagnation_limit, 20);
        assert_eq!(fast.time_limit_ms, Some(10_000));

        let balanced = StoppingConfig::balanced();
        assert_eq!(balanced.max_generations, 300);
        assert_eq!(balanced.time_limit_ms, Some(30_000));

        let quality = StoppingConfig::quality();
        assert_eq!(quality.stagnation_limit, 80);
        assert_eq!(quality.time_limit_ms, Some(60_000));

        for config in [fast, balanced, quality] {
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_preset_chainable() {
        let config = StoppingConfig::fast().with_target_fitness(100);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.target_fitness, Some(100));
    }
}
