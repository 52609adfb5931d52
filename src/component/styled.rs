//! Styled-component definitions and the per-render pipeline.

use std::collections::HashMap;

use super::config::{ConfigError, TixConfig};
use super::element::ElementType;
use super::identity::Identity;
use super::props::Props;
use crate::class::{default_mixer, parse_class_name, ClassMixer};
use crate::variant::resolve::{build_selection, variant_fragments};
use crate::variant::VariantError;

/// Factory for styled-component definitions.
///
/// A factory carries the [`ClassMixer`] its definitions compose with.
/// `Tix::default()` picks up the process-wide default mixer;
/// [`Tix::new`] installs an explicit one (a tailwind-merge-style mixer,
/// for instance).
///
/// # Example
///
/// ```rust
/// use tix::{Props, Selection, Tix, TixConfig, VariantDef, VariantMap};
///
/// let tix = Tix::default();
/// let button = tix
///     .styled(
///         TixConfig {
///             base: "btn".to_string(),
///             variants: VariantMap::new()
///                 .add("size", VariantDef::table([("sm", "btn-sm"), ("lg", "btn-lg")]))
///                 .add("outlined", "btn-outline"),
///             defaults: Selection::new().set("size", "sm"),
///             ..TixConfig::default()
///         },
///         "button",
///     )
///     .unwrap();
///
/// let rendered = button.render(&Props::new().variant("outlined", true)).unwrap();
/// assert_eq!(rendered.class_name, "__tix_Button btn btn-sm btn-outline");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tix {
    mixer: ClassMixer,
}

impl Tix {
    /// Creates a factory composing with an explicit mixer.
    pub fn new(mixer: ClassMixer) -> Self {
        Self { mixer }
    }

    /// Builds a definition from a config and a target element.
    ///
    /// The config is validated here, so a malformed definition fails at
    /// definition time rather than on some later render.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when validation fails; see
    /// [`TixConfig::validate`].
    pub fn styled(
        &self,
        config: TixConfig,
        element: impl Into<ElementType>,
    ) -> Result<Styled, ConfigError> {
        config.validate()?;

        let element = element.into();
        let identity = Identity::derive(&element, config.name.as_deref());

        Ok(Styled {
            config,
            element,
            identity,
            mixer: self.mixer,
        })
    }
}

impl Default for Tix {
    /// A factory composing with the process-wide default mixer.
    ///
    /// The mixer is captured here; later calls to
    /// [`crate::set_default_mixer`] affect new factories only.
    fn default() -> Self {
        Self {
            mixer: default_mixer(),
        }
    }
}

/// Builds a definition with the process-wide default mixer.
///
/// Shorthand for `Tix::default().styled(config, element)`.
pub fn styled(
    config: TixConfig,
    element: impl Into<ElementType>,
) -> Result<Styled, ConfigError> {
    Tix::default().styled(config, element)
}

/// One styled-component definition.
///
/// Immutable once built; each [`render`](Styled::render) is a pure
/// computation over the definition and the caller's props.
#[derive(Debug, Clone)]
pub struct Styled {
    config: TixConfig,
    element: ElementType,
    identity: Identity,
    mixer: ClassMixer,
}

impl Styled {
    /// Diagnostic display name, e.g. `"TixButton"`.
    pub fn display_name(&self) -> &str {
        &self.identity.display_name
    }

    /// Owned identity token, e.g. `"__tix_Button"`.
    pub fn class_token(&self) -> &str {
        &self.identity.class_token
    }

    /// The configuration this definition was built from, for introspection.
    pub fn config(&self) -> &TixConfig {
        &self.config
    }

    /// The declared target element.
    pub fn element(&self) -> &ElementType {
        &self.element
    }

    /// Composes the class string for one render.
    ///
    /// The incoming class string is partitioned into owned and foreign
    /// tokens, the effective variant selection is resolved, and the final
    /// string is mixed in fixed precedence order: own identity token,
    /// inherited owned tokens, base fragment, variant fragments in
    /// declaration order, inherited foreign tokens.
    ///
    /// # Errors
    ///
    /// Returns a [`VariantError`] when a table variant's value matches no
    /// option key.
    pub fn render(&self, props: &Props) -> Result<Rendered, VariantError> {
        let parsed = parse_class_name(props.incoming_class().unwrap_or(""));

        let selection = build_selection(
            &self.config.variants,
            props.variant_values(),
            &self.config.defaults,
        );
        let fragments = variant_fragments(&self.config.variants, &selection, &parsed.owned)?;

        let mut classes = Vec::with_capacity(2 + parsed.len() + fragments.len());
        classes.push(self.identity.class_token.clone());
        classes.extend(parsed.owned);
        classes.push(self.config.base.clone());
        classes.extend(fragments);
        classes.extend(parsed.foreign);

        let element = match props.as_override() {
            Some(element) => element.clone(),
            None => self.element.clone(),
        };

        Ok(Rendered {
            element,
            class_name: (self.mixer)(&classes),
            attrs: props.attrs().clone(),
        })
    }
}

/// What the host framework receives for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The effective element: the caller's `as` override or the declared one.
    pub element: ElementType,
    /// The composed class string.
    pub class_name: String,
    /// Attributes passed through untouched. Variant values and the `as`
    /// override never appear here.
    pub attrs: HashMap<String, String>,
}
