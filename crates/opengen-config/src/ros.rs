//! Configuration of the generated ROS package.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Identifier};

const DEFAULT_PACKAGE_NAME: &str = "open_ros";
const DEFAULT_NODE_NAME: &str = "ros_node_optimizer";
const DEFAULT_DESCRIPTION: &str = "parametric optimization with OpEn";
const DEFAULT_RATE_HZ: f64 = 10.0;
const DEFAULT_QUEUE_SIZE: usize = 100;
const DEFAULT_PUBLISHER_SUBTOPIC: &str = "result";
const DEFAULT_SUBSCRIBER_SUBTOPIC: &str = "parameters";

/// Settings of the ROS node wrapped around a generated optimizer.
///
/// The value is immutable: every `with_*` method consumes it and returns the
/// updated configuration. Name setters validate their input and return an
/// error instead of a partially updated value.
///
/// # Example
///
/// ```
/// use opengen_config::RosConfiguration;
///
/// let config = RosConfiguration::new()
///     .with_package_name("my_pkg")?
///     .with_node_name("mpc_node")?
///     .with_rate(35.0)?
///     .with_queue_sizes(10, 5);
///
/// assert_eq!(config.package_name().as_str(), "my_pkg");
/// assert_eq!(config.rate(), 35.0);
/// assert_eq!(config.params_topic_queue_size(), 5);
/// # Ok::<(), opengen_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RosConfiguration {
    package_name: Identifier,
    node_name: Identifier,
    description: String,
    rate: f64,
    result_topic_queue_size: usize,
    params_topic_queue_size: usize,
    publisher_subtopic: String,
    subscriber_subtopic: String,
}

impl Default for RosConfiguration {
    fn default() -> Self {
        Self {
            package_name: Identifier::from_static(DEFAULT_PACKAGE_NAME),
            node_name: Identifier::from_static(DEFAULT_NODE_NAME),
            description: DEFAULT_DESCRIPTION.to_owned(),
            rate: DEFAULT_RATE_HZ,
            result_topic_queue_size: DEFAULT_QUEUE_SIZE,
            params_topic_queue_size: DEFAULT_QUEUE_SIZE,
            publisher_subtopic: DEFAULT_PUBLISHER_SUBTOPIC.to_owned(),
            subscriber_subtopic: DEFAULT_SUBSCRIBER_SUBTOPIC.to_owned(),
        }
    }
}

impl RosConfiguration {
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

    /// Checks the settings that deserialization cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate(self.rate)
    }

    /// Sets the package name, which is also the folder of the generated node.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIdentifier`] if the name is not a valid
    /// [`Identifier`].
    pub fn with_package_name(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        self.package_name = Identifier::parse("package", name.into())?;
        Ok(self)
    }

    /// Sets the node name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIdentifier`] if the name is not a valid
    /// [`Identifier`].
    pub fn with_node_name(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        self.node_name = Identifier::parse("node", name.into())?;
        Ok(self)
    }

    /// Sets the description written to `package.xml`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the node rate in Hz.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] unless the rate is positive and finite.
    pub fn with_rate(mut self, rate: f64) -> Result<Self, ConfigError> {
        check_rate(rate)?;
        self.rate = rate;
        Ok(self)
    }

    /// Sets the queue sizes of the result and parameter topics.
    pub fn with_queue_sizes(mut self, result_topic: usize, parameter_topic: usize) -> Self {
        self.result_topic_queue_size = result_topic;
        self.params_topic_queue_size = parameter_topic;
        self
    }

    /// Results are published on `~/{publisher_subtopic}`.
    pub fn with_publisher_subtopic(mut self, subtopic: impl Into<String>) -> Self {
        self.publisher_subtopic = subtopic.into();
        self
    }

    /// Parameters are read from `~/{subscriber_subtopic}`.
    pub fn with_subscriber_subtopic(mut self, subtopic: impl Into<String>) -> Self {
        self.subscriber_subtopic = subtopic.into();
        self
    }

    pub fn package_name(&self) -> &Identifier {
        &self.package_name
    }

    pub fn node_name(&self) -> &Identifier {
        &self.node_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Node rate in Hz.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn result_topic_queue_size(&self) -> usize {
        self.result_topic_queue_size
    }

    pub fn params_topic_queue_size(&self) -> usize {
        self.params_topic_queue_size
    }

    pub fn publisher_subtopic(&self) -> &str {
        &self.publisher_subtopic
    }

    pub fn subscriber_subtopic(&self) -> &str {
        &self.subscriber_subtopic
    }
}

fn check_rate(rate: f64) -> Result<(), ConfigError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "rate must be positive and finite, got {}",
            rate
        )))
    }
}
