//! Tokenization of incoming class strings.
//!
//! Components receive a `class_name` from whichever component wraps them.
//! Part of that string is foreign (hand-written classes, utility classes,
//! classes added by other tooling) and part of it may have been produced by
//! this crate further up the tree, carrying component identity in tokens
//! marked with [`TOKEN_PREFIX`]. The two kinds are separated at parse time:
//! owned tokens are re-emitted in the owned position of the composed class
//! string and handed to computed variants as ancestry, foreign tokens are
//! passed through verbatim.

/// Reserved marker prefix identifying class tokens produced by this crate.
pub const TOKEN_PREFIX: &str = "__tix_";

/// An incoming class string split into owned and foreign tokens.
///
/// Relative order is preserved within each list; no token is dropped or
/// rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedClassName {
    /// Tokens carrying the reserved [`TOKEN_PREFIX`].
    pub owned: Vec<String>,
    /// Everything else, passed through untouched.
    pub foreign: Vec<String>,
}

impl ParsedClassName {
    /// Total number of tokens across both lists.
    pub fn len(&self) -> usize {
        self.owned.len() + self.foreign.len()
    }

    /// Returns true if the incoming class string held no tokens.
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty() && self.foreign.is_empty()
    }
}

/// Splits a class string on whitespace and partitions the tokens into
/// owned vs foreign.
///
/// # Example
///
/// ```rust
/// use tix::parse_class_name;
///
/// let parsed = parse_class_name("foo __tix_Bar baz");
/// assert_eq!(parsed.owned, vec!["__tix_Bar"]);
/// assert_eq!(parsed.foreign, vec!["foo", "baz"]);
/// ```
pub fn parse_class_name(class_name: &str) -> ParsedClassName {
    let mut parsed = ParsedClassName::default();

    for token in class_name.split_whitespace() {
        if token.starts_with(TOKEN_PREFIX) {
            parsed.owned.push(token.to_string());
        } else {
            parsed.foreign.push(token.to_string());
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_string() {
        let parsed = parse_class_name("");
        assert!(parsed.is_empty());
        assert_eq!(parsed.len(), 0);
    }

    #[test]
    fn test_parse_foreign_only() {
        let parsed = parse_class_name("btn btn-primary");
        assert_eq!(parsed.foreign, vec!["btn", "btn-primary"]);
        assert!(parsed.owned.is_empty());
    }

    #[test]
    fn test_parse_partitions_owned_and_foreign() {
        let parsed = parse_class_name("foo __tix_Bar");
        assert_eq!(parsed.owned, vec!["__tix_Bar"]);
        assert_eq!(parsed.foreign, vec!["foo"]);
    }

    #[test]
    fn test_parse_preserves_relative_order() {
        let parsed = parse_class_name("a __tix_X b __tix_Y c");
        assert_eq!(parsed.owned, vec!["__tix_X", "__tix_Y"]);
        assert_eq!(parsed.foreign, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_collapses_repeated_whitespace() {
        let parsed = parse_class_name("  foo \t __tix_Bar\n baz  ");
        assert_eq!(parsed.owned, vec!["__tix_Bar"]);
        assert_eq!(parsed.foreign, vec!["foo", "baz"]);
    }

    #[test]
    fn test_parse_prefix_must_lead_the_token() {
        // A token merely containing the marker is foreign.
        let parsed = parse_class_name("not__tix_Bar");
        assert!(parsed.owned.is_empty());
        assert_eq!(parsed.foreign, vec!["not__tix_Bar"]);
    }
}
