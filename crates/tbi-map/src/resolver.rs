//! Alias resolution with a specificity tie-break.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::trace;

use tbi_model::{CanonicalField, FieldKind};

use crate::table::ALIASES;

/// Shortest alias eligible for the substring fallback scan.
const MIN_FALLBACK_ALIAS_LEN: usize = 4;

/// Read-only alias lookup, built once at process start.
pub struct AliasTable {
    exact: BTreeMap<&'static str, CanonicalField>,
}

static BUILTIN: LazyLock<AliasTable> = LazyLock::new(AliasTable::from_entries);

impl AliasTable {
    /// The built-in table backed by [`ALIASES`].
    #[must_use]
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN
    }

    fn from_entries() -> Self {
        let mut exact = BTreeMap::new();
        for (alias, field) in ALIASES {
            let previous = exact.insert(*alias, *field);
            debug_assert!(
                previous.is_none(),
                "alias '{alias}' maps to more than one canonical field"
            );
        }
        Self { exact }
    }

    /// Resolves a raw extracted field name to its canonical identity.
    ///
    /// Lookup is case-insensitive and ignores whitespace and punctuation.
    /// Unmatched names fall back to a longest-substring scan where the most
    /// specific alias wins; labels containing "percentile" only ever match
    /// percentile fields, so a CTSIB percentile label can never collapse
    /// onto the path-length field describing the same sway measurement.
    ///
    /// Returns `None` for names with no alias; callers retain those as raw
    /// passthrough text rather than miscoding them.
    #[must_use]
    pub fn resolve(&self, raw_name: &str) -> Option<CanonicalField> {
        let normalized = normalize_name(raw_name);
        if normalized.is_empty() {
            return None;
        }
        if let Some(&field) = self.exact.get(normalized.as_str()) {
            return Some(field);
        }
        let resolved = self.longest_contained_alias(&normalized);
        trace!(raw = raw_name, resolved = ?resolved, "alias fallback scan");
        resolved
    }

    /// Most-specific (longest) alias contained in the normalized name.
    fn longest_contained_alias(&self, normalized: &str) -> Option<CanonicalField> {
        let wants_percentile = normalized.contains("percentile");
        let mut best: Option<(&'static str, CanonicalField)> = None;
        for (&alias, &field) in &self.exact {
            // Abbreviations like "std" or "pro" match exactly or not at all;
            // as substrings they would miscode unrelated labels.
            if alias.len() < MIN_FALLBACK_ALIAS_LEN || !normalized.contains(alias) {
                continue;
            }
            let field = if wants_percentile {
                // A label containing "percentile" may only land on a
                // percentile field; CTSIB path-length aliases are promoted
                // to their percentile counterpart instead of matching.
                match percentile_counterpart(field) {
                    Some(counterpart) => counterpart,
                    None => continue,
                }
            } else if field.kind() == FieldKind::Percentile
                && tbi_model::TestFamily::Ctsib == field.family()
            {
                // The reverse guard: a CTSIB label without "percentile"
                // describes the raw sway measurement.
                continue;
            } else {
                field
            };
            match best {
                Some((best_alias, _)) if alias.len() <= best_alias.len() => {}
                _ => best = Some((alias, field)),
            }
        }
        best.map(|(_, field)| field)
    }

    /// Number of alias entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

/// Percentile field a matched alias may stand in for when the raw label
/// says "percentile". Percentile fields map to themselves; CTSIB path
/// lengths map to the percentile of the same condition; everything else has
/// no counterpart.
fn percentile_counterpart(field: CanonicalField) -> Option<CanonicalField> {
    match field {
        CanonicalField::StandardPathLength => Some(CanonicalField::StandardScorePercentile),
        CanonicalField::ProprioceptionPathLength => {
            Some(CanonicalField::ProprioceptionScorePercentile)
        }
        CanonicalField::VisualPathLength => Some(CanonicalField::VisualScorePercentile),
        CanonicalField::VestibularPathLength => Some(CanonicalField::VestibularScorePercentile),
        field if field.kind() == FieldKind::Percentile => Some(field),
        _ => None,
    }
}

/// Collapses a raw label to lowercase ASCII alphanumerics.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_case_whitespace_and_punctuation() {
        assert_eq!(normalize_name("  PCL-5 Score "), "pcl5score");
        assert_eq!(normalize_name("standard_score_percentile"), "standardscorepercentile");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn alias_table_has_no_duplicate_keys() {
        // Every table row must survive into the lookup map; a duplicate
        // normalized alias would silently drop one of its targets.
        assert_eq!(AliasTable::builtin().len(), ALIASES.len());
    }

    #[test]
    fn exact_aliases_resolve() {
        let table = AliasTable::builtin();
        assert_eq!(
            table.resolve("Pursuits Score"),
            Some(CanonicalField::Pursuits)
        );
        assert_eq!(table.resolve("EyeQ"), Some(CanonicalField::DysfunctionalScale));
        assert_eq!(table.resolve("unheard-of label"), None);
    }

    #[test]
    fn percentile_labels_never_resolve_to_path_lengths() {
        let table = AliasTable::builtin();
        // Exact hit on the percentile alias.
        assert_eq!(
            table.resolve("proprioception percentile"),
            Some(CanonicalField::ProprioceptionScorePercentile)
        );
        // Fallback scan: the generic "proprioception" alias is contained in
        // the label but points at the path length, so it must be skipped.
        assert_eq!(
            table.resolve("proprioception sway percentile"),
            Some(CanonicalField::ProprioceptionScorePercentile)
        );
        // And the reverse: a path-length label stays on the path length.
        assert_eq!(
            table.resolve("proprioception path length"),
            Some(CanonicalField::ProprioceptionPathLength)
        );
    }

    #[test]
    fn most_specific_alias_wins_in_fallback() {
        let table = AliasTable::builtin();
        // "standardscorepercentile" (23 chars) beats "standard" (8 chars).
        assert_eq!(
            table.resolve("baseline standard score percentile value"),
            Some(CanonicalField::StandardScorePercentile)
        );
    }
}
