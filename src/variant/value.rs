//! Per-render variant values and selections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The value a variant takes for one render.
///
/// Literal variants are toggled with a [`Flag`](VariantValue::Flag);
/// table and computed variants usually take a
/// [`Choice`](VariantValue::Choice) naming one of their options. In config
/// data a value is written as a bare bool or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    /// On/off toggle, the natural value for literal variants.
    Flag(bool),
    /// A named option, the natural value for table variants.
    Choice(String),
}

impl VariantValue {
    /// Whether this value activates a literal variant.
    ///
    /// `Flag(true)` and non-empty choices are truthy; `Flag(false)` and the
    /// empty string are not.
    pub fn is_truthy(&self) -> bool {
        match self {
            VariantValue::Flag(b) => *b,
            VariantValue::Choice(s) => !s.is_empty(),
        }
    }

    /// The key form used for table lookups.
    ///
    /// Flags look up `"true"` / `"false"`; choices look up themselves.
    pub fn as_key(&self) -> &str {
        match self {
            VariantValue::Flag(true) => "true",
            VariantValue::Flag(false) => "false",
            VariantValue::Choice(s) => s.as_str(),
        }
    }
}

impl From<bool> for VariantValue {
    fn from(flag: bool) -> Self {
        VariantValue::Flag(flag)
    }
}

impl From<&str> for VariantValue {
    fn from(choice: &str) -> Self {
        VariantValue::Choice(choice.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(choice: String) -> Self {
        VariantValue::Choice(choice)
    }
}

/// A mapping from variant name to the value in effect.
///
/// Selections appear in two roles: the declared defaults of a definition,
/// and the effective values of one render after caller-override-then-default
/// precedence. Variants without a value are absent, not mapped to a
/// sentinel.
///
/// # Example
///
/// ```rust
/// use tix::Selection;
///
/// let defaults = Selection::new()
///     .set("size", "md")
///     .set("outlined", true);
///
/// assert!(defaults.get("size").is_some());
/// assert!(defaults.get("color").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    values: HashMap<String, VariantValue>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning the updated selection for chaining.
    pub fn set<V: Into<VariantValue>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Looks up the value for a variant, if one is present.
    pub fn get(&self, name: &str) -> Option<&VariantValue> {
        self.values.get(name)
    }

    /// Returns true if a value is present for the variant.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of variants with a value present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variant has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
