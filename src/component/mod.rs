//! Styled-component definitions.
//!
//! This module provides the definition-time and render-time surfaces:
//!
//! - [`TixConfig`] / [`ConfigError`]: the per-definition configuration and
//!   its fail-fast validation
//! - [`ElementType`]: the closed set of render targets
//! - [`Tix`] / [`Styled`]: the factory and the definitions it builds
//! - [`Props`] / [`Rendered`]: one render's input and output

mod config;
mod element;
mod identity;
mod props;
mod styled;

pub use config::{ConfigError, TixConfig};
pub use element::ElementType;
pub use identity::Identity;
pub use props::Props;
pub use styled::{styled, Rendered, Styled, Tix};
