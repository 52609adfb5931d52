//! Per-render props.

use std::collections::HashMap;

use super::element::ElementType;
use crate::variant::{Selection, VariantValue};

/// Everything a caller can pass to one render of a [`crate::Styled`]
/// definition.
///
/// Props are an explicit projection: the fields this crate interprets
/// (incoming class string, `as` override, variant values) are declared,
/// and anything destined for the rendered element travels in the `attrs`
/// pass-through map. Nothing is filtered by key name.
///
/// # Example
///
/// ```rust
/// use tix::Props;
///
/// let props = Props::new()
///     .class_name("mx-2")
///     .variant("size", "lg")
///     .variant("outlined", true)
///     .attr("type", "submit");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Props {
    class_name: Option<String>,
    as_element: Option<ElementType>,
    variants: Selection,
    attrs: HashMap<String, String>,
}

impl Props {
    /// Creates empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the incoming class string handed down by the wrapping component.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Overrides the element the definition renders to.
    pub fn as_element(mut self, element: impl Into<ElementType>) -> Self {
        self.as_element = Some(element.into());
        self
    }

    /// Sets the value for a declared variant.
    pub fn variant<V: Into<VariantValue>>(mut self, name: &str, value: V) -> Self {
        self.variants = self.variants.set(name, value);
        self
    }

    /// Adds an attribute passed through to the rendered element untouched.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// The incoming class string, if any.
    pub fn incoming_class(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// The `as` override, if any.
    pub fn as_override(&self) -> Option<&ElementType> {
        self.as_element.as_ref()
    }

    /// The caller-supplied variant values.
    pub fn variant_values(&self) -> &Selection {
        &self.variants
    }

    /// The pass-through attributes.
    pub fn attrs(&self) -> &HashMap<String, String> {
        &self.attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_default_is_empty() {
        let props = Props::new();
        assert!(props.incoming_class().is_none());
        assert!(props.as_override().is_none());
        assert!(props.variant_values().is_empty());
        assert!(props.attrs().is_empty());
    }

    #[test]
    fn test_props_builder() {
        let props = Props::new()
            .class_name("foo")
            .as_element("a")
            .variant("size", true)
            .attr("href", "/docs");

        assert_eq!(props.incoming_class(), Some("foo"));
        assert_eq!(props.as_override(), Some(&ElementType::tag("a")));
        assert!(props.variant_values().contains("size"));
        assert_eq!(props.attrs().get("href").map(String::as_str), Some("/docs"));
    }

    #[test]
    fn test_variant_values_stay_out_of_attrs() {
        let props = Props::new().variant("size", "lg").attr("id", "cta");
        assert_eq!(props.attrs().len(), 1);
        assert!(props.attrs().get("size").is_none());
    }
}
