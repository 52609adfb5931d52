//! Render-time variant resolution errors.

/// Error returned when variant resolution fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// A table variant's effective value matched none of its option keys.
    ///
    /// Surfaced loudly instead of emitting an empty fragment: a silently
    /// dropped class is a hard-to-diagnose visual bug.
    UnknownOption {
        variant: String,
        value: String,
        expected: Vec<String>,
    },
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantError::UnknownOption {
                variant,
                value,
                expected,
            } => {
                write!(
                    f,
                    "variant '{}' has no option '{}' (expected one of: {})",
                    variant,
                    value,
                    expected.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for VariantError {}
