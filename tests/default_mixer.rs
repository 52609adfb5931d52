//! Process-wide default-mixer override.
//!
//! Kept in its own test binary: the override is process-global, and the
//! other integration tests rely on the stock joining behavior.

use tix::{set_default_mixer, styled, Props, TixConfig};

fn shouting_mixer(classes: &[String]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| c.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_set_default_mixer_affects_new_factories() {
    set_default_mixer(shouting_mixer);

    let chip = styled(
        TixConfig {
            base: "chip".to_string(),
            ..TixConfig::default()
        },
        "span",
    )
    .unwrap();

    let rendered = chip.render(&Props::new()).unwrap();
    assert_eq!(rendered.class_name, "__TIX_SPAN CHIP");
}
