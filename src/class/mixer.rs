//! Class mixing strategy.
//!
//! The final class string is produced by a mixer: a function that collapses
//! the ordered fragment list into one string. The default mixer drops empty
//! fragments and joins with single spaces, performing no deduplication —
//! later fragments are expected to win specificity ties in the consuming
//! style system, so order is left alone. Applications using a utility-class
//! framework can install a merging mixer (tailwind-merge style) instead,
//! either per factory via [`crate::Tix::new`] or process-wide via
//! [`set_default_mixer`].

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Strategy collapsing an ordered fragment list into the final class string.
///
/// Mixers receive the fragments exactly as composed, including any empty
/// ones (an unset base fragment arrives as `""`), and must tolerate them.
pub type ClassMixer = fn(&[String]) -> String;

/// Default mixer: drops empty fragments and joins with single spaces.
///
/// # Example
///
/// ```rust
/// use tix::join_classes;
///
/// let classes = ["btn".to_string(), String::new(), "btn-lg".to_string()];
/// assert_eq!(join_classes(&classes), "btn btn-lg");
/// ```
pub fn join_classes(classes: &[String]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

static DEFAULT_MIXER: Lazy<Mutex<ClassMixer>> = Lazy::new(|| Mutex::new(join_classes));

/// Overrides the mixer used by factories created with `Tix::default()`.
///
/// This is useful for testing or for installing an application-wide merging
/// mixer without threading a factory through every call site. Definitions
/// capture the mixer in effect when they are created; already-built
/// [`crate::Styled`] values are unaffected.
pub fn set_default_mixer(mixer: ClassMixer) {
    let mut guard = DEFAULT_MIXER.lock().unwrap();
    *guard = mixer;
}

pub(crate) fn default_mixer() -> ClassMixer {
    *DEFAULT_MIXER.lock().unwrap()
}

/// Collapses internal whitespace in a class literal to single spaces.
///
/// Lets multi-line class literals be authored readably:
///
/// ```rust
/// use tix::tw;
///
/// let base = tw("px-4 py-2
///                rounded
///                text-sm");
/// assert_eq!(base, "px-4 py-2 rounded text-sm");
/// ```
pub fn tw(classes: &str) -> String {
    classes.split_whitespace().collect::<Vec<_>>().join(" ")
}
