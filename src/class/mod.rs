//! Class-string tokenization and mixing.
//!
//! This module provides the two halves of class-string handling:
//!
//! - [`parse_class_name`]: splits an incoming class string into tokens this
//!   crate produced (owned) vs everything else (foreign)
//! - [`ClassMixer`] / [`join_classes`]: the strategy that collapses the
//!   composed fragment list into the final class string
//!
//! Plus [`tw`], a small helper for authoring multi-line class literals.

mod mixer;
mod parse;

pub use mixer::{join_classes, set_default_mixer, tw, ClassMixer};
pub use parse::{parse_class_name, ParsedClassName, TOKEN_PREFIX};

pub(crate) use mixer::default_mixer;
