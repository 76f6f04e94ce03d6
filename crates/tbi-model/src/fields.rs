//! Canonical clinical field identifiers.
//!
//! A [`CanonicalField`] is one normalized clinical data point, independent of
//! how any extraction pass labeled it. The full inventory is fixed at compile
//! time; alias resolution maps free-text extractor labels onto it.

use std::fmt;

use crate::error::ModelError;

/// The value shape a canonical field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    /// Raw numeric measurement or score (e.g. a path length in cm).
    Numeric,
    /// Percentile rank against normative data (0–100).
    Percentile,
    /// Free text (patient identity fields).
    Text,
}

/// The assessment a canonical field belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TestFamily {
    /// Patient identity fields, not tied to any one assessment.
    Identity,
    /// RightEye video-nystagmography screen.
    Vng,
    /// CTSIB / BTrackS posturography.
    Ctsib,
    /// Creyos cognitive battery.
    Creyos,
    /// Psychometric questionnaires (RPQ, PCL-5, PSQI, PHQ-9, GAD-7).
    Questionnaire,
}

macro_rules! canonical_fields {
    ($( $variant:ident => ($key:literal, $label:literal, $kind:ident, $family:ident) ),+ $(,)?) => {
        /// One normalized clinical field identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum CanonicalField {
            $( $variant, )+
        }

        impl CanonicalField {
            /// Every canonical field, in declaration order.
            pub const ALL: &'static [CanonicalField] = &[ $( CanonicalField::$variant, )+ ];

            /// Stable snake_case key used in persisted records and reports.
            #[must_use]
            pub fn key(self) -> &'static str {
                match self {
                    $( CanonicalField::$variant => $key, )+
                }
            }

            /// Human-readable display label.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $( CanonicalField::$variant => $label, )+
                }
            }

            /// Declared value type for this field.
            #[must_use]
            pub fn kind(self) -> FieldKind {
                match self {
                    $( CanonicalField::$variant => FieldKind::$kind, )+
                }
            }

            /// Test family this field belongs to.
            #[must_use]
            pub fn family(self) -> TestFamily {
                match self {
                    $( CanonicalField::$variant => TestFamily::$family, )+
                }
            }

            /// Looks up a field by its stable key.
            pub fn from_key(key: &str) -> Result<Self, ModelError> {
                match key {
                    $( $key => Ok(CanonicalField::$variant), )+
                    _ => Err(ModelError::UnknownFieldKey(key.to_string())),
                }
            }
        }
    };
}

canonical_fields! {
    // Patient identity
    PatientName => ("patient_name", "Patient Name", Text, Identity),
    DateOfBirth => ("date_of_birth", "Date of Birth", Text, Identity),
    DateOfInjury => ("date_of_injury", "Date of Injury", Text, Identity),
    DateOfTesting => ("date_of_testing", "Date of Testing", Text, Identity),

    // RightEye VNG
    Pursuits => ("pursuits", "Pursuits", Numeric, Vng),
    Saccades => ("saccades", "Saccades", Numeric, Vng),
    Fixations => ("fixations", "Fixations", Numeric, Vng),
    DysfunctionalScale => ("dysfunctional_scale", "Dysfunctional Scale (EyeQ)", Numeric, Vng),

    // CTSIB / BTrackS path lengths (cm)
    StandardPathLength => ("standard_path_length", "Standard Path Length", Numeric, Ctsib),
    ProprioceptionPathLength => ("proprioception_path_length", "Proprioception Path Length", Numeric, Ctsib),
    VisualPathLength => ("visual_path_length", "Visual Path Length", Numeric, Ctsib),
    VestibularPathLength => ("vestibular_path_length", "Vestibular Path Length", Numeric, Ctsib),

    // CTSIB / BTrackS percentiles
    StandardScorePercentile => ("standard_score_percentile", "Standard Score", Percentile, Ctsib),
    ProprioceptionScorePercentile => ("proprioception_score_percentile", "Proprioception Score", Percentile, Ctsib),
    VisualScorePercentile => ("visual_score_percentile", "Visual Score", Percentile, Ctsib),
    VestibularScorePercentile => ("vestibular_score_percentile", "Vestibular Score", Percentile, Ctsib),

    // Creyos cognitive battery percentiles
    AttentionPercentile => ("attention_percentile", "Attention", Percentile, Creyos),
    DeductiveReasoningPercentile => ("deductive_reasoning_percentile", "Deductive Reasoning", Percentile, Creyos),
    EpisodicMemoryPercentile => ("episodic_memory_percentile", "Episodic Memory", Percentile, Creyos),
    MentalRotationPercentile => ("mental_rotation_percentile", "Mental Rotation", Percentile, Creyos),
    PlanningPercentile => ("planning_percentile", "Planning", Percentile, Creyos),
    PolygonsPercentile => ("polygons_percentile", "Polygons", Percentile, Creyos),
    ResponseInhibitionPercentile => ("response_inhibition_percentile", "Response Inhibition", Percentile, Creyos),
    SpatialShortTermMemoryPercentile => ("spatial_short_term_memory_percentile", "Spatial Short-Term Memory", Percentile, Creyos),
    VerbalReasoningPercentile => ("verbal_reasoning_percentile", "Verbal Reasoning", Percentile, Creyos),
    VerbalShortTermMemoryPercentile => ("verbal_short_term_memory_percentile", "Verbal Short-Term Memory", Percentile, Creyos),
    VisuospatialWorkingMemoryPercentile => ("visuospatial_working_memory_percentile", "Visuospatial Working Memory", Percentile, Creyos),
    WorkingMemoryPercentile => ("working_memory_percentile", "Working Memory", Percentile, Creyos),

    // Psychometric questionnaires
    Rpq => ("rpq", "RPQ", Numeric, Questionnaire),
    Pcl5 => ("pcl_5", "PCL-5", Numeric, Questionnaire),
    Psqi => ("psqi", "PSQI", Numeric, Questionnaire),
    Phq9 => ("phq_9", "PHQ-9", Numeric, Questionnaire),
    Gad7 => ("gad_7", "GAD-7", Numeric, Questionnaire),
}

impl CanonicalField {
    /// True for fields carried in the persisted `scores` object
    /// (everything except patient identity).
    #[must_use]
    pub fn is_score(self) -> bool {
        self.family() != TestFamily::Identity
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl serde::Serialize for CanonicalField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> serde::Deserialize<'de> for CanonicalField {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        CanonicalField::from_key(&key).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn keys_are_unique() {
        let keys: BTreeSet<&str> = CanonicalField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), CanonicalField::ALL.len());
    }

    #[test]
    fn key_round_trips() {
        for field in CanonicalField::ALL {
            assert_eq!(CanonicalField::from_key(field.key()).unwrap(), *field);
        }
        assert!(CanonicalField::from_key("not_a_field").is_err());
    }

    #[test]
    fn percentile_fields_never_share_keys_with_path_lengths() {
        for field in CanonicalField::ALL {
            let key = field.key();
            if key.contains("percentile") {
                assert_eq!(field.kind(), FieldKind::Percentile, "{key}");
            }
            if key.contains("path_length") {
                assert_eq!(field.kind(), FieldKind::Numeric, "{key}");
            }
        }
    }

    #[test]
    fn serde_uses_stable_keys() {
        let json = serde_json::to_string(&CanonicalField::StandardScorePercentile).unwrap();
        assert_eq!(json, "\"standard_score_percentile\"");
        let back: CanonicalField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CanonicalField::StandardScorePercentile);
    }
}
