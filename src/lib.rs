//! Variant-driven CSS class composition for polymorphic styled components.
//!
//! tix turns a declarative styling config — a base class, named variants,
//! and defaults — into a component definition that composes one class
//! string per render and hands the host framework the target element plus
//! composed props. Definitions carry an identity token (`__tix_Name`) in
//! their class output, so nested definitions recognize each other's tokens
//! and pass everything else through verbatim.
//!
//! # Quick start
//!
//! ```rust
//! use tix::{styled, Props, Selection, TixConfig, VariantDef, VariantMap};
//!
//! let button = styled(
//!     TixConfig {
//!         base: "btn".to_string(),
//!         variants: VariantMap::new()
//!             .add("size", VariantDef::table([("sm", "btn-sm"), ("lg", "btn-lg")]))
//!             .add("outlined", "btn-outline"),
//!         defaults: Selection::new().set("size", "sm"),
//!         ..TixConfig::default()
//!     },
//!     "button",
//! )
//! .unwrap();
//!
//! let rendered = button
//!     .render(&Props::new().variant("size", "lg").class_name("mx-2"))
//!     .unwrap();
//!
//! assert_eq!(rendered.class_name, "__tix_Button btn btn-lg mx-2");
//! assert_eq!(button.display_name(), "TixButton");
//! ```
//!
//! # Composition order
//!
//! The composed string always reads, in order: own identity token,
//! inherited owned tokens, base fragment, variant fragments in declaration
//! order, inherited foreign classes. Nothing is deduplicated — later
//! fragments are expected to win specificity ties in the consuming style
//! system. Swap the joining policy by installing a [`ClassMixer`], either
//! per factory ([`Tix::new`]) or process-wide ([`set_default_mixer`]).

mod class;
mod component;
mod util;
mod variant;

pub use class::{
    join_classes, parse_class_name, set_default_mixer, tw, ClassMixer, ParsedClassName,
    TOKEN_PREFIX,
};
pub use component::{
    styled, ConfigError, ElementType, Identity, Props, Rendered, Styled, Tix, TixConfig,
};
pub use variant::{ComputedFn, Selection, VariantDef, VariantError, VariantMap, VariantValue};
