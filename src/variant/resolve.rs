//! Effective-value resolution and fragment emission.
//!
//! This is the core of the crate: deciding which declared variants apply
//! for one render and mapping each to its class fragment.
//!
//! Resolution runs in two passes. The first builds the effective selection:
//! a variant enters it iff the caller supplied a value or a default is
//! declared, with the caller winning. Falsy-but-present values stay in the
//! selection — an explicit `false` suppresses a literal fragment rather
//! than falling back to the default. The second pass walks the declarations
//! in order and emits one fragment per selected variant: literals gate on
//! truthiness, tables look the key form up and fail loudly on a miss,
//! computed variants run with the value, the peer selection, and the
//! inherited owned tokens. Empty fragments are dropped.

use super::def::{VariantDef, VariantMap};
use super::error::VariantError;
use super::value::Selection;

/// Builds the effective selection for one render.
///
/// Caller overrides win over declared defaults; variants with neither are
/// absent from the result. Values the declarations don't name are ignored.
pub(crate) fn build_selection(
    variants: &VariantMap,
    overrides: &Selection,
    defaults: &Selection,
) -> Selection {
    let mut selection = Selection::new();

    for name in variants.names() {
        let effective = overrides.get(name).or_else(|| defaults.get(name));
        if let Some(value) = effective {
            selection = selection.set(name, value.clone());
        }
    }

    selection
}

/// Emits one class fragment per selected variant, in declaration order.
///
/// # Errors
///
/// Returns [`VariantError::UnknownOption`] when a table variant's value
/// matches none of its keys.
pub(crate) fn variant_fragments(
    variants: &VariantMap,
    selection: &Selection,
    ancestors: &[String],
) -> Result<Vec<String>, VariantError> {
    let mut fragments = Vec::new();

    for (name, def) in variants.iter() {
        let value = match selection.get(name) {
            Some(value) => value,
            None => continue,
        };

        let fragment = match def {
            VariantDef::Literal(class) => {
                if value.is_truthy() {
                    class.clone()
                } else {
                    String::new()
                }
            }
            VariantDef::Table(table) => {
                let key = value.as_key();
                match table.get(key) {
                    Some(class) => class.clone(),
                    None => {
                        let mut expected: Vec<String> = table.keys().cloned().collect();
                        expected.sort();
                        return Err(VariantError::UnknownOption {
                            variant: name.to_string(),
                            value: key.to_string(),
                            expected,
                        });
                    }
                }
            }
            VariantDef::Computed(compute) => compute(value, selection, ancestors),
        };

        if !fragment.is_empty() {
            fragments.push(fragment);
        }
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::value::VariantValue;

    fn sample_variants() -> VariantMap {
        VariantMap::new()
            .add("size", "big")
            .add("color", VariantDef::table([("red", "c-red"), ("blue", "c-blue")]))
    }

    #[test]
    fn test_selection_caller_wins_over_default() {
        let variants = sample_variants();
        let overrides = Selection::new().set("color", "blue");
        let defaults = Selection::new().set("color", "red");

        let selection = build_selection(&variants, &overrides, &defaults);
        assert_eq!(
            selection.get("color"),
            Some(&VariantValue::Choice("blue".into()))
        );
    }

    #[test]
    fn test_selection_falls_back_to_default() {
        let variants = sample_variants();
        let defaults = Selection::new().set("color", "red");

        let selection = build_selection(&variants, &Selection::new(), &defaults);
        assert_eq!(
            selection.get("color"),
            Some(&VariantValue::Choice("red".into()))
        );
    }

    #[test]
    fn test_selection_omits_unset_variants() {
        let variants = sample_variants();
        let selection = build_selection(&variants, &Selection::new(), &Selection::new());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_keeps_falsy_caller_value() {
        let variants = sample_variants();
        let overrides = Selection::new().set("size", false);
        let defaults = Selection::new().set("size", true);

        // Explicit false must not fall back to the default.
        let selection = build_selection(&variants, &overrides, &defaults);
        assert_eq!(selection.get("size"), Some(&VariantValue::Flag(false)));
    }

    #[test]
    fn test_selection_ignores_undeclared_names() {
        let variants = sample_variants();
        let overrides = Selection::new().set("ghost", true);

        let selection = build_selection(&variants, &overrides, &Selection::new());
        assert!(!selection.contains("ghost"));
    }

    #[test]
    fn test_literal_emits_when_truthy() {
        let variants = sample_variants();
        let selection = Selection::new().set("size", true);

        let fragments = variant_fragments(&variants, &selection, &[]).unwrap();
        assert_eq!(fragments, vec!["big"]);
    }

    #[test]
    fn test_literal_suppressed_when_falsy() {
        let variants = sample_variants();
        let selection = Selection::new().set("size", false);

        let fragments = variant_fragments(&variants, &selection, &[]).unwrap();
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_table_lookup() {
        let variants = sample_variants();
        let selection = Selection::new().set("color", "red");

        let fragments = variant_fragments(&variants, &selection, &[]).unwrap();
        assert_eq!(fragments, vec!["c-red"]);
    }

    #[test]
    fn test_table_unknown_option_fails() {
        let variants = sample_variants();
        let selection = Selection::new().set("color", "green");

        let err = variant_fragments(&variants, &selection, &[]).unwrap_err();
        assert_eq!(
            err,
            VariantError::UnknownOption {
                variant: "color".to_string(),
                value: "green".to_string(),
                expected: vec!["blue".to_string(), "red".to_string()],
            }
        );
    }

    #[test]
    fn test_fragments_follow_declaration_order() {
        let variants = VariantMap::new()
            .add("first", "one")
            .add("second", "two")
            .add("third", "three");
        let selection = Selection::new()
            .set("third", true)
            .set("first", true)
            .set("second", true);

        let fragments = variant_fragments(&variants, &selection, &[]).unwrap();
        assert_eq!(fragments, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_computed_sees_value_peers_and_ancestors() {
        let variants = VariantMap::new()
            .add("tone", VariantDef::table([("dark", "t-dark")]))
            .add(
                "size",
                VariantDef::computed(|value, selection, ancestors| {
                    let tone = selection
                        .get("tone")
                        .map(VariantValue::as_key)
                        .unwrap_or("none");
                    format!("size-{}-{}-{}", value.as_key(), tone, ancestors.len())
                }),
            );
        let selection = Selection::new().set("tone", "dark").set("size", "lg");
        let ancestors = vec!["__tix_Card".to_string()];

        let fragments = variant_fragments(&variants, &selection, &ancestors).unwrap();
        assert_eq!(fragments, vec!["t-dark", "size-lg-dark-1"]);
    }

    #[test]
    fn test_computed_empty_fragment_dropped() {
        let variants = VariantMap::new().add("quiet", VariantDef::computed(|_, _, _| String::new()));
        let selection = Selection::new().set("quiet", true);

        let fragments = variant_fragments(&variants, &selection, &[]).unwrap();
        assert!(fragments.is_empty());
    }
}
