//! Configuration system for opengen.
//!
//! Describes the solver parameters and the ROS wrapper of a generated
//! optimizer. Both are immutable values built with consuming `with_*`
//! setters, and both load from TOML or YAML.
//!
//! # Examples
//!
//! Load a ROS configuration from TOML, keeping defaults for missing keys:
//!
//! ```
//! use opengen_config::RosConfiguration;
//!
//! let config = RosConfiguration::from_toml_str(r#"
//!     package_name = "parametric_optimizer"
//!     rate = 20.0
//! "#).unwrap();
//!
//! assert_eq!(config.package_name().as_str(), "parametric_optimizer");
//! assert_eq!(config.node_name().as_str(), "ros_node_optimizer");
//! ```
//!
//! Invalid names are rejected while parsing:
//!
//! ```
//! use opengen_config::RosConfiguration;
//!
//! assert!(RosConfiguration::from_toml_str(r#"node_name = "1node""#).is_err());
//! ```

mod identifier;
mod ros;
mod solver;


use thiserror::Error;

pub use identifier::{is_valid as is_valid_identifier, Identifier};
pub use ros::RosConfiguration;
pub use solver::{CbfgsParameters, SolverConfiguration};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid {kind} name: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
