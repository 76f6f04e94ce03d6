use proptest::prelude::*;

use tbi_map::{AliasTable, normalize_name};
use tbi_model::{CanonicalField, FieldKind};

#[test]
fn every_canonical_key_resolves_to_itself() {
    let table = AliasTable::builtin();
    for field in CanonicalField::ALL {
        assert_eq!(
            table.resolve(field.key()),
            Some(*field),
            "canonical key '{}' must resolve to its own field",
            field.key()
        );
    }
}

#[test]
fn resolution_ignores_case_and_whitespace() {
    let table = AliasTable::builtin();
    for raw in [
        "Standard Score Percentile",
        "STANDARD_SCORE_PERCENTILE",
        "  standard score percentile  ",
        "standard-score-percentile",
    ] {
        assert_eq!(
            table.resolve(raw),
            Some(CanonicalField::StandardScorePercentile),
            "{raw:?}"
        );
    }
}

// Regression for the CTSIB ambiguity: percentile labels and path-length
// labels describe the same sway measurement but are distinct fields.
#[test]
fn percentile_and_path_length_labels_stay_apart() {
    let table = AliasTable::builtin();
    let conditions = ["standard", "proprioception", "visual", "vestibular"];
    for condition in conditions {
        let pct = table.resolve(&format!("{condition} percentile")).unwrap();
        assert_eq!(pct.kind(), FieldKind::Percentile, "{condition}");
        assert!(pct.key().ends_with("_percentile"), "{condition}");

        let path = table.resolve(&format!("{condition} path length")).unwrap();
        assert_eq!(path.kind(), FieldKind::Numeric, "{condition}");
        assert!(path.key().ends_with("_path_length"), "{condition}");
    }
}

#[test]
fn unknown_labels_resolve_to_none() {
    let table = AliasTable::builtin();
    assert_eq!(table.resolve("totally novel field"), None);
    assert_eq!(table.resolve(""), None);
    assert_eq!(table.resolve("   "), None);
}

proptest! {
    // Any case or surrounding-whitespace variation of a label resolves to
    // the same field as the label itself.
    #[test]
    fn resolution_is_case_and_padding_invariant(
        index in 0usize..CanonicalField::ALL.len(),
        flips in proptest::collection::vec(any::<bool>(), 0..48),
        left_pad in 0usize..4,
        right_pad in 0usize..4,
    ) {
        let field = CanonicalField::ALL[index];
        let mut mangled = String::new();
        for _ in 0..left_pad {
            mangled.push(' ');
        }
        for (i, ch) in field.key().chars().enumerate() {
            let upper = flips.get(i).copied().unwrap_or(false);
            if upper {
                mangled.push(ch.to_ascii_uppercase());
            } else {
                mangled.push(ch);
            }
        }
        for _ in 0..right_pad {
            mangled.push(' ');
        }
        let table = AliasTable::builtin();
        prop_assert_eq!(table.resolve(&mangled), Some(field));
    }

    #[test]
    fn normalize_never_emits_non_alphanumerics(raw in "\\PC{0,32}") {
        let normalized = normalize_name(&raw);
        prop_assert!(normalized.chars().all(|c| c.is_ascii_alphanumeric()));
        prop_assert!(normalized.chars().all(|c| !c.is_ascii_uppercase()));
    }
}
