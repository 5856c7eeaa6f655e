//! Validated package and node names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A name usable for a generated package or node.
///
/// Invariant: non-empty, starts with an ASCII letter or underscore, and
/// continues with ASCII letters, digits, and underscores only.
///
/// # Example
///
/// ```
/// use opengen_config::Identifier;
///
/// assert!(Identifier::new("my_pkg").is_ok());
/// assert!(Identifier::new("_private2").is_ok());
/// assert!(Identifier::new("1bad").is_err());
/// assert!(Identifier::new("bad name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Validates `value` as an identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        Self::parse("identifier", value.into())
    }

    /// Validates `value`, reporting failures as an invalid `kind` name.
    pub(crate) fn parse(kind: &'static str, value: String) -> Result<Self, ConfigError> {
        if is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidIdentifier { kind, value })
        }
    }

    /// Wraps a literal known to satisfy the rule.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(is_valid(value), "invalid identifier literal {value:?}");
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true if `value` satisfies the identifier rule.
pub fn is_valid(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl TryFrom<String> for Identifier {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
