//! Qualitative interpretation bands for the rendered report.
//!
//! Cutoffs follow the published scoring guides for each instrument; the
//! report shows the band label next to the raw score.

use tbi_model::{CanonicalField, PatientRecord};

/// VNG dysfunction-scale band (pursuits, saccades, fixations, EyeQ).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DysfunctionLevel {
    Severe,
    Moderate,
    Mild,
    Normal,
}

impl DysfunctionLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DysfunctionLevel::Severe => "Severe dysfunction",
            DysfunctionLevel::Moderate => "Moderate dysfunction",
            DysfunctionLevel::Mild => "Mild dysfunction",
            DysfunctionLevel::Normal => "Normal",
        }
    }
}

/// Bands a VNG dysfunction score.
#[must_use]
pub fn interpret_dysfunction(score: f64) -> DysfunctionLevel {
    if score <= 24.0 {
        DysfunctionLevel::Severe
    } else if score < 50.0 {
        DysfunctionLevel::Moderate
    } else if score < 75.0 {
        DysfunctionLevel::Mild
    } else {
        DysfunctionLevel::Normal
    }
}

/// Posturography percentile band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentileBand {
    Abnormal,
    BelowAverage,
    Normal,
}

impl PercentileBand {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PercentileBand::Abnormal => "Abnormal",
            PercentileBand::BelowAverage => "Below Average",
            PercentileBand::Normal => "Normal",
        }
    }
}

/// Bands a posturography percentile.
#[must_use]
pub fn interpret_percentile(percentile: u8) -> PercentileBand {
    if percentile < 25 {
        PercentileBand::Abnormal
    } else if percentile < 75 {
        PercentileBand::BelowAverage
    } else {
        PercentileBand::Normal
    }
}

/// Bands a questionnaire total score. Returns `None` for fields that are
/// not questionnaires.
#[must_use]
pub fn interpret_questionnaire(field: CanonicalField, score: f64) -> Option<&'static str> {
    let label = match field {
        CanonicalField::Rpq => {
            if score < 16.0 {
                "Not indicative of Post-Concussion Syndrome"
            } else if score <= 35.0 {
                "Indicative of Post-Concussion Syndrome"
            } else {
                "PCS; predictive of moderate-severe functional limitations"
            }
        }
        CanonicalField::Pcl5 => {
            if score < 31.0 {
                "Sub-threshold; does not meet criteria for PTSD"
            } else if score <= 33.0 {
                "Probable PTSD"
            } else {
                "Significant likelihood of PTSD"
            }
        }
        CanonicalField::Psqi => {
            if score <= 5.0 {
                "Good sleep quality"
            } else {
                "Poor sleep quality"
            }
        }
        CanonicalField::Phq9 => {
            if score <= 4.0 {
                "Minimal depression"
            } else if score <= 9.0 {
                "Mild depression"
            } else if score <= 14.0 {
                "Moderate depression"
            } else if score <= 19.0 {
                "Moderately severe depression"
            } else {
                "Severe depression"
            }
        }
        CanonicalField::Gad7 => {
            if score <= 4.0 {
                "Minimal anxiety"
            } else if score <= 9.0 {
                "Mild anxiety"
            } else if score <= 14.0 {
                "Moderate anxiety"
            } else {
                "Severe anxiety"
            }
        }
        _ => return None,
    };
    Some(label)
}

/// True when any questionnaire score sits at or above its clinical cutoff.
#[must_use]
pub fn questionnaire_abnormal(record: &PatientRecord) -> bool {
    let at_least = |field, cutoff: f64| record.number(field).is_some_and(|v| v >= cutoff);
    at_least(CanonicalField::Rpq, 16.0)
        || at_least(CanonicalField::Pcl5, 31.0)
        || record
            .number(CanonicalField::Psqi)
            .is_some_and(|v| v > 5.0)
        || at_least(CanonicalField::Phq9, 5.0)
        || at_least(CanonicalField::Gad7, 5.0)
}

#[cfg(test)]
mod tests {
    use tbi_model::FieldValue;

    use super::*;

    #[test]
    fn dysfunction_band_edges() {
        assert_eq!(interpret_dysfunction(24.0), DysfunctionLevel::Severe);
        assert_eq!(interpret_dysfunction(25.0), DysfunctionLevel::Moderate);
        assert_eq!(interpret_dysfunction(49.0), DysfunctionLevel::Moderate);
        assert_eq!(interpret_dysfunction(50.0), DysfunctionLevel::Mild);
        assert_eq!(interpret_dysfunction(75.0), DysfunctionLevel::Normal);
    }

    #[test]
    fn percentile_band_edges() {
        assert_eq!(interpret_percentile(24), PercentileBand::Abnormal);
        assert_eq!(interpret_percentile(25), PercentileBand::BelowAverage);
        assert_eq!(interpret_percentile(74), PercentileBand::BelowAverage);
        assert_eq!(interpret_percentile(75), PercentileBand::Normal);
    }

    #[test]
    fn questionnaire_band_edges() {
        assert_eq!(
            interpret_questionnaire(CanonicalField::Rpq, 15.0),
            Some("Not indicative of Post-Concussion Syndrome")
        );
        assert_eq!(
            interpret_questionnaire(CanonicalField::Rpq, 16.0),
            Some("Indicative of Post-Concussion Syndrome")
        );
        assert_eq!(
            interpret_questionnaire(CanonicalField::Pcl5, 31.0),
            Some("Probable PTSD")
        );
        assert_eq!(
            interpret_questionnaire(CanonicalField::Psqi, 6.0),
            Some("Poor sleep quality")
        );
        assert_eq!(
            interpret_questionnaire(CanonicalField::Phq9, 20.0),
            Some("Severe depression")
        );
        assert_eq!(
            interpret_questionnaire(CanonicalField::Gad7, 15.0),
            Some("Severe anxiety")
        );
        assert_eq!(interpret_questionnaire(CanonicalField::Pursuits, 10.0), None);
    }

    #[test]
    fn abnormal_flag_tracks_cutoffs() {
        let mut record = PatientRecord::default();
        assert!(!questionnaire_abnormal(&record));

        record.set(CanonicalField::Psqi, FieldValue::Number(5.0));
        assert!(!questionnaire_abnormal(&record));

        record.set(CanonicalField::Psqi, FieldValue::Number(6.0));
        assert!(questionnaire_abnormal(&record));
    }
}
