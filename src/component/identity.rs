//! Component identity derivation.

use super::element::ElementType;
use crate::class::TOKEN_PREFIX;

/// The two names a definition carries: its owned class token and its
/// human-readable label.
///
/// The token travels in class strings to propagate identity through nested
/// composition; the label is for diagnostics and debugging display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Owned class token, e.g. `"__tix_Button"`.
    pub class_token: String,
    /// Diagnostic label, e.g. `"TixButton"`.
    pub display_name: String,
}

impl Identity {
    /// Derives identity from an explicit name or the element's display name.
    ///
    /// An explicit name wins regardless of the underlying element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tix::{ElementType, Identity};
    ///
    /// let identity = Identity::derive(&ElementType::tag("button"), None);
    /// assert_eq!(identity.class_token, "__tix_Button");
    /// assert_eq!(identity.display_name, "TixButton");
    /// ```
    pub fn derive(element: &ElementType, explicit: Option<&str>) -> Identity {
        let name = match explicit {
            Some(name) => name.to_string(),
            None => element.display_name(),
        };

        Identity {
            class_token: format!("{}{}", TOKEN_PREFIX, name),
            display_name: format!("Tix{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_tag() {
        let identity = Identity::derive(&ElementType::tag("button"), None);
        assert_eq!(identity.class_token, "__tix_Button");
        assert_eq!(identity.display_name, "TixButton");
    }

    #[test]
    fn test_explicit_name_wins() {
        let identity = Identity::derive(&ElementType::tag("button"), Some("CTA"));
        assert_eq!(identity.class_token, "__tix_CTA");
        assert_eq!(identity.display_name, "TixCTA");
    }

    #[test]
    fn test_identity_from_anonymous_component() {
        let identity = Identity::derive(&ElementType::anonymous(), None);
        assert_eq!(identity.class_token, "__tix_Component");
        assert_eq!(identity.display_name, "TixComponent");
    }
}
