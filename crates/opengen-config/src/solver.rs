//! Parameters of the generated solver.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Parameters of the penalty / augmented Lagrangian method and its inner solver.
///
/// Setters validate their argument and consume `self`, so an invalid value
/// never produces a partially updated configuration.
///
/// # Examples
///
/// ```
/// use opengen_config::SolverConfiguration;
/// use std::time::Duration;
///
/// let config = SolverConfiguration::new()
///     .with_tolerance(1e-6)?
///     .with_lbfgs_memory(15)?
///     .with_max_duration_micros(20_000)?;
///
/// assert_eq!(config.lbfgs_memory(), 15);
/// assert_eq!(config.max_duration(), Duration::from_millis(20));
/// assert!(SolverConfiguration::new().with_lbfgs_memory(1).is_err());
/// # Ok::<(), opengen_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfiguration {
    /// Tolerance of the inner solver.
    tolerance: f64,

    /// Tolerance of the inner solver at the first outer iteration.
    initial_tolerance: f64,

    /// Memory of the L-BFGS directions.
    lbfgs_memory: usize,

    max_inner_iterations: usize,

    max_outer_iterations: usize,

    /// Tolerance on constraint violation.
    constraints_tolerance: f64,

    /// `None` lets the generated solver compute it.
    initial_penalty: Option<f64>,

    /// Factor applied to the penalty weights at every outer iteration.
    penalty_weight_update_factor: f64,

    max_duration_micros: u64,

    /// Factor applied to the inner tolerance at every outer iteration.
    inner_tolerance_update_factor: f64,

    sufficient_decrease_coefficient: f64,

    cbfgs: Option<CbfgsParameters>,

    preconditioning: bool,
}

/// Parameters of the cautious BFGS update.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CbfgsParameters {
    pub alpha: f64,
    pub epsilon: f64,
    /// Tolerance on the s-y inner product.
    pub sy_epsilon: f64,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            initial_tolerance: 1e-2,
            lbfgs_memory: 10,
            max_inner_iterations: 2000,
            max_outer_iterations: 50,
            constraints_tolerance: 1e-4,
            initial_penalty: None,
            penalty_weight_update_factor: 5.0,
            max_duration_micros: 5_000_000,
            inner_tolerance_update_factor: 0.1,
            sufficient_decrease_coefficient: 0.1,
            cbfgs: None,
            preconditioning: false,
        }
    }
}

impl SolverConfiguration {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the same range checks as the setters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_open_unit(
            "sufficient decrease coefficient",
            self.sufficient_decrease_coefficient,
        )?;
        if let Some(penalty) = self.initial_penalty {
            check_positive("initial penalty", penalty)?;
        }
        check_positive("tolerance", self.tolerance)?;
        check_positive("initial tolerance", self.initial_tolerance)?;
        check_update_factor(self.inner_tolerance_update_factor)?;
        check_at_least("L-BFGS memory", self.lbfgs_memory as u64, 2)?;
        check_at_least("maximum inner iterations", self.max_inner_iterations as u64, 1)?;
        check_positive("constraints tolerance", self.constraints_tolerance)?;
        check_at_least("maximum outer iterations", self.max_outer_iterations as u64, 1)?;
        check_penalty_factor(self.penalty_weight_update_factor)?;
        check_at_least("maximum duration (microseconds)", self.max_duration_micros, 1)?;
        if let Some(cbfgs) = &self.cbfgs {
            check_cbfgs(cbfgs)?;
        }
        Ok(())
    }

    /// Sets the sufficient decrease coefficient; must lie in `(0, 1)`.
    pub fn with_sufficient_decrease_coefficient(mut self, value: f64) -> Result<Self, ConfigError> {
        check_open_unit("sufficient decrease coefficient", value)?;
        self.sufficient_decrease_coefficient = value;
        Ok(self)
    }

    /// Sets the initial penalty; must be positive.
    ///
    /// Overrides the value the generated solver would otherwise compute.
    pub fn with_initial_penalty(mut self, value: f64) -> Result<Self, ConfigError> {
        check_positive("initial penalty", value)?;
        self.initial_penalty = Some(value);
        Ok(self)
    }

    /// Clears the initial penalty so the generated solver computes it.
    pub fn without_initial_penalty(mut self) -> Self {
        self.initial_penalty = None;
        self
    }

    pub fn with_tolerance(mut self, value: f64) -> Result<Self, ConfigError> {
        check_positive("tolerance", value)?;
        self.tolerance = value;
        Ok(self)
    }

    pub fn with_initial_tolerance(mut self, value: f64) -> Result<Self, ConfigError> {
        check_positive("initial tolerance", value)?;
        self.initial_tolerance = value;
        Ok(self)
    }

    /// Sets the inner tolerance update factor; must lie in `(0, 1]`.
    pub fn with_inner_tolerance_update_factor(mut self, value: f64) -> Result<Self, ConfigError> {
        check_update_factor(value)?;
        self.inner_tolerance_update_factor = value;
        Ok(self)
    }

    /// Sets the L-BFGS memory; must be at least 2.
    pub fn with_lbfgs_memory(mut self, value: usize) -> Result<Self, ConfigError> {
        check_at_least("L-BFGS memory", value as u64, 2)?;
        self.lbfgs_memory = value;
        Ok(self)
    }

    pub fn with_max_inner_iterations(mut self, value: usize) -> Result<Self, ConfigError> {
        check_at_least("maximum inner iterations", value as u64, 1)?;
        self.max_inner_iterations = value;
        Ok(self)
    }

    /// Sets the tolerance on constraint violation.
    pub fn with_delta_tolerance(mut self, value: f64) -> Result<Self, ConfigError> {
        check_positive("constraints tolerance", value)?;
        self.constraints_tolerance = value;
        Ok(self)
    }

    pub fn with_max_outer_iterations(mut self, value: usize) -> Result<Self, ConfigError> {
        check_at_least("maximum outer iterations", value as u64, 1)?;
        self.max_outer_iterations = value;
        Ok(self)
    }

    /// Sets the penalty weight update factor; must be at least 1.
    pub fn with_penalty_weight_update_factor(mut self, value: f64) -> Result<Self, ConfigError> {
        check_penalty_factor(value)?;
        self.penalty_weight_update_factor = value;
        Ok(self)
    }

    pub fn with_max_duration_micros(mut self, value: u64) -> Result<Self, ConfigError> {
        check_at_least("maximum duration (microseconds)", value, 1)?;
        self.max_duration_micros = value;
        Ok(self)
    }

    /// Sets the CBFGS parameters; `alpha` and `epsilon` must be nonnegative.
    pub fn with_cbfgs_parameters(
        mut self,
        alpha: f64,
        epsilon: f64,
        sy_epsilon: f64,
    ) -> Result<Self, ConfigError> {
        let cbfgs = CbfgsParameters {
            alpha,
            epsilon,
            sy_epsilon,
        };
        check_cbfgs(&cbfgs)?;
        self.cbfgs = Some(cbfgs);
        Ok(self)
    }

    /// Enables automatic preconditioning, which also computes the initial penalty.
    pub fn with_preconditioning(mut self, enabled: bool) -> Self {
        self.preconditioning = enabled;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn initial_tolerance(&self) -> f64 {
        self.initial_tolerance
    }

    pub fn lbfgs_memory(&self) -> usize {
        self.lbfgs_memory
    }

    pub fn max_inner_iterations(&self) -> usize {
        self.max_inner_iterations
    }

    pub fn max_outer_iterations(&self) -> usize {
        self.max_outer_iterations
    }

    pub fn constraints_tolerance(&self) -> f64 {
        self.constraints_tolerance
    }

    pub fn initial_penalty(&self) -> Option<f64> {
        self.initial_penalty
    }

    pub fn penalty_weight_update_factor(&self) -> f64 {
        self.penalty_weight_update_factor
    }

    pub fn max_duration_micros(&self) -> u64 {
        self.max_duration_micros
    }

    /// Returns the maximum execution time as a Duration.
    pub fn max_duration(&self) -> Duration {
        Duration::from_micros(self.max_duration_micros)
    }

    pub fn inner_tolerance_update_factor(&self) -> f64 {
        self.inner_tolerance_update_factor
    }

    pub fn sufficient_decrease_coefficient(&self) -> f64 {
        self.sufficient_decrease_coefficient
    }

    pub fn cbfgs(&self) -> Option<&CbfgsParameters> {
        self.cbfgs.as_ref()
    }

    pub fn preconditioning(&self) -> bool {
        self.preconditioning
    }
}

fn invalid(msg: String) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(msg))
}

fn check_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        invalid(format!("{} must be positive, got {}", name, value))
    }
}

fn check_open_unit(name: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        invalid(format!("{} must be in (0, 1), got {}", name, value))
    }
}

fn check_update_factor(value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        invalid(format!(
            "inner tolerance update factor must be in (0, 1], got {}",
            value
        ))
    }
}

fn check_penalty_factor(value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        invalid(format!(
            "penalty weight update factor must be at least 1, got {}",
            value
        ))
    }
}

fn check_at_least(name: &str, value: u64, min: u64) -> Result<(), ConfigError> {
    if value >= min {
        Ok(())
    } else {
        invalid(format!("{} must be at least {}, got {}", name, min, value))
    }
}

fn check_cbfgs(cbfgs: &CbfgsParameters) -> Result<(), ConfigError> {
    if cbfgs.alpha.is_nan() || cbfgs.alpha < 0.0 {
        return invalid(format!("CBFGS alpha must be nonnegative, got {}", cbfgs.alpha));
    }
    if cbfgs.epsilon.is_nan() || cbfgs.epsilon < 0.0 {
        return invalid(format!(
            "CBFGS epsilon must be nonnegative, got {}",
            cbfgs.epsilon
        ));
    }
    Ok(())
}
