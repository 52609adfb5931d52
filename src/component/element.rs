//! Render targets.

use crate::util::capitalize_first;

/// The element a definition renders to.
///
/// Targets are a closed sum rather than an erased type: intrinsic elements
/// carry their tag, composite components carry an optional display name.
/// The same enum is used for the `as` override on [`crate::Props`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    /// An intrinsic element, e.g. `"button"` or `"div"`.
    Tag(String),
    /// A composite component, named for diagnostics when it has a name.
    Component {
        /// Display name, when the component declares one.
        name: Option<String>,
    },
}

impl ElementType {
    /// An intrinsic element target.
    pub fn tag(name: impl Into<String>) -> Self {
        ElementType::Tag(name.into())
    }

    /// A named composite component target.
    pub fn component(name: impl Into<String>) -> Self {
        ElementType::Component {
            name: Some(name.into()),
        }
    }

    /// A composite component target without a declared name.
    pub fn anonymous() -> Self {
        ElementType::Component { name: None }
    }

    /// Capitalized display name used for identity derivation.
    ///
    /// Tags are capitalized (`"button"` → `"Button"`); components use their
    /// declared name, falling back to `"Component"`.
    pub fn display_name(&self) -> String {
        match self {
            ElementType::Tag(tag) => capitalize_first(tag),
            ElementType::Component { name: Some(name) } => capitalize_first(name),
            ElementType::Component { name: None } => "Component".to_string(),
        }
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        ElementType::tag(tag)
    }
}
