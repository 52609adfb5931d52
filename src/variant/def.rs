//! Variant declarations.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::value::{Selection, VariantValue};

/// Signature of a computed variant.
///
/// Receives the effective value, the full selection for reading peer
/// variants, and the owned tokens inherited from wrapping components.
pub type ComputedFn = dyn Fn(&VariantValue, &Selection, &[String]) -> String + Send + Sync;

/// How one declared variant maps its value to a class fragment.
///
/// Declarations are fixed at definition time; the three forms are resolved
/// by exhaustive matching at render time.
///
/// # Example
///
/// ```rust
/// use tix::VariantDef;
///
/// // Boolean-gated literal fragment
/// let outlined = VariantDef::literal("border");
///
/// // Option table
/// let color = VariantDef::table([("red", "c-red"), ("blue", "c-blue")]);
///
/// // Computed from the value and peer selections
/// let size = VariantDef::computed(|value, _selection, _ancestors| {
///     format!("size-{}", value.as_key())
/// });
/// ```
#[derive(Clone)]
pub enum VariantDef {
    /// A single fragment, emitted iff the effective value is truthy.
    Literal(String),
    /// A fragment per option value; an unmatched key is a hard error.
    Table(HashMap<String, String>),
    /// A fragment computed from the value, peer selections, and ancestry.
    Computed(Arc<ComputedFn>),
}

impl VariantDef {
    /// Declares a boolean-gated literal fragment.
    pub fn literal(class: impl Into<String>) -> Self {
        VariantDef::Literal(class.into())
    }

    /// Declares an option table mapping values to fragments.
    pub fn table<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        VariantDef::Table(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Declares a computed fragment.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&VariantValue, &Selection, &[String]) -> String + Send + Sync + 'static,
    {
        VariantDef::Computed(Arc::new(f))
    }
}

impl fmt::Debug for VariantDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantDef::Literal(class) => f.debug_tuple("Literal").field(class).finish(),
            VariantDef::Table(table) => f.debug_tuple("Table").field(table).finish(),
            VariantDef::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for VariantDef {
    fn from(class: &str) -> Self {
        VariantDef::Literal(class.to_string())
    }
}

impl From<String> for VariantDef {
    fn from(class: String) -> Self {
        VariantDef::Literal(class)
    }
}

impl From<HashMap<String, String>> for VariantDef {
    fn from(table: HashMap<String, String>) -> Self {
        VariantDef::Table(table)
    }
}

impl<'de> Deserialize<'de> for VariantDef {
    /// Deserializes from config data: a bare string becomes a literal
    /// declaration, a map becomes a table. Computed variants only exist in
    /// code.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Literal(String),
            Table(HashMap<String, String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Literal(class) => VariantDef::Literal(class),
            Repr::Table(table) => VariantDef::Table(table),
        })
    }
}

/// Declaration-ordered registry of variants for one definition.
///
/// Order is observable: variant fragments appear in the composed class
/// string in declaration order, which matters when the consuming style
/// system breaks specificity ties by rule order.
///
/// # Example
///
/// ```rust
/// use tix::{VariantDef, VariantMap};
///
/// let variants = VariantMap::new()
///     .add("size", VariantDef::table([("sm", "text-sm"), ("lg", "text-lg")]))
///     .add("outlined", "border");
///
/// assert_eq!(variants.names().collect::<Vec<_>>(), vec!["size", "outlined"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantMap {
    entries: Vec<(String, VariantDef)>,
}

impl VariantMap {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant, returning the updated registry for chaining.
    ///
    /// Re-adding an existing name replaces its declaration in place, so the
    /// original declaration position (and thus fragment order) is kept.
    pub fn add<V: Into<VariantDef>>(mut self, name: &str, def: V) -> Self {
        let def = def.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = def,
            None => self.entries.push((name.to_string(), def)),
        }
        self
    }

    /// Looks up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&VariantDef> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    /// Returns true if a variant with this name is declared.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterates over `(name, declaration)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantDef)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Number of declared variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no variants are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for VariantMap {
    /// Deserializes from a map, keeping the document's declaration order.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VariantMapVisitor;

        impl<'de> Visitor<'de> for VariantMapVisitor {
            type Value = VariantMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of variant names to declarations")
            }

            fn visit_map<A>(self, mut access: A) -> Result<VariantMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = VariantMap::new();
                while let Some((name, def)) = access.next_entry::<String, VariantDef>()? {
                    map = map.add(&name, def);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(VariantMapVisitor)
    }
}
