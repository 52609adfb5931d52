//! Definition-time configuration.

use serde::Deserialize;

use crate::variant::{Selection, VariantDef, VariantMap};

/// Configuration for one styled-component definition.
///
/// Supplied once per definition and immutable thereafter. All fields are
/// optional in config data, so definitions can come from code or from a
/// JSON/YAML document.
///
/// # Example
///
/// ```rust
/// use tix::{Selection, TixConfig, VariantDef, VariantMap};
///
/// let config = TixConfig {
///     base: "btn".to_string(),
///     variants: VariantMap::new()
///         .add("size", VariantDef::table([("sm", "btn-sm"), ("lg", "btn-lg")]))
///         .add("outlined", "btn-outline"),
///     defaults: Selection::new().set("size", "sm"),
///     ..TixConfig::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TixConfig {
    /// Explicit component name; wins over the element-derived one.
    pub name: Option<String>,
    /// Base class fragment, emitted before any variant fragment.
    pub base: String,
    /// Declared variants, in emission order.
    pub variants: VariantMap,
    /// Default values applied when the caller supplies none.
    pub defaults: Selection,
}

impl TixConfig {
    /// Checks the configuration for mistakes that would otherwise surface
    /// as puzzling behavior at render time.
    ///
    /// Called by [`crate::Tix::styled`] when a definition is built, so a
    /// bad config fails before its first render. Can also be called
    /// directly for early detection.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyVariantName`] for a variant declared with an
    ///   empty name
    /// - [`ConfigError::UnknownDefault`] for a default naming no declared
    ///   variant
    /// - [`ConfigError::DefaultNotInTable`] for a table variant whose
    ///   default matches none of its keys
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.variants.names() {
            if name.is_empty() {
                return Err(ConfigError::EmptyVariantName);
            }
        }

        for (name, value) in self.defaults.iter() {
            let def = match self.variants.get(name) {
                Some(def) => def,
                None => {
                    return Err(ConfigError::UnknownDefault {
                        name: name.to_string(),
                    })
                }
            };

            if let VariantDef::Table(table) = def {
                let key = value.as_key();
                if !table.contains_key(key) {
                    let mut expected: Vec<String> = table.keys().cloned().collect();
                    expected.sort();
                    return Err(ConfigError::DefaultNotInTable {
                        variant: name.to_string(),
                        value: key.to_string(),
                        expected,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Error returned when configuration validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variant was declared with an empty name.
    EmptyVariantName,
    /// A default names a variant that isn't declared.
    UnknownDefault { name: String },
    /// A table variant's default matches none of its option keys.
    DefaultNotInTable {
        variant: String,
        value: String,
        expected: Vec<String>,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyVariantName => {
                write!(f, "variant declared with an empty name")
            }
            ConfigError::UnknownDefault { name } => {
                write!(f, "default supplied for undeclared variant '{}'", name)
            }
            ConfigError::DefaultNotInTable {
                variant,
                value,
                expected,
            } => {
                write!(
                    f,
                    "default '{}' for variant '{}' matches no option (expected one of: {})",
                    value,
                    variant,
                    expected.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
