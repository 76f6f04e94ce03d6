//! Declarative alias table.
//!
//! Maps normalized extractor labels onto canonical fields. Keys are stored
//! pre-normalized (lowercase, ASCII alphanumerics only); extending clinical
//! coding means adding rows here, never touching resolver control flow.

use tbi_model::CanonicalField;

/// (normalized alias, canonical field) pairs.
///
/// Many aliases map to one field; no alias may appear twice. Percentile
/// labels and path-length labels are kept strictly apart: the raw CTSIB
/// export uses near-identical wording for both measurements.
pub const ALIASES: &[(&str, CanonicalField)] = &[
    // Patient identity
    ("patientname", CanonicalField::PatientName),
    ("patientfullname", CanonicalField::PatientName),
    ("dateofbirth", CanonicalField::DateOfBirth),
    ("dob", CanonicalField::DateOfBirth),
    ("dateofinjury", CanonicalField::DateOfInjury),
    ("doi", CanonicalField::DateOfInjury),
    ("dateoftesting", CanonicalField::DateOfTesting),
    ("dateofservice", CanonicalField::DateOfTesting),
    ("assessmentdate", CanonicalField::DateOfTesting),
    ("dos", CanonicalField::DateOfTesting),
    // RightEye VNG
    ("pursuits", CanonicalField::Pursuits),
    ("pursuitsscore", CanonicalField::Pursuits),
    ("saccades", CanonicalField::Saccades),
    ("saccadesscore", CanonicalField::Saccades),
    ("fixations", CanonicalField::Fixations),
    ("fixationsscore", CanonicalField::Fixations),
    ("eyeq", CanonicalField::DysfunctionalScale),
    ("eyeqscore", CanonicalField::DysfunctionalScale),
    ("dysfunctionalscale", CanonicalField::DysfunctionalScale),
    // CTSIB / BTrackS path lengths (cm)
    ("standard", CanonicalField::StandardPathLength),
    ("standardscore", CanonicalField::StandardPathLength),
    ("standardpathlength", CanonicalField::StandardPathLength),
    ("std", CanonicalField::StandardPathLength),
    ("proprioception", CanonicalField::ProprioceptionPathLength),
    ("proprioceptionscore", CanonicalField::ProprioceptionPathLength),
    ("proprioceptionpathlength", CanonicalField::ProprioceptionPathLength),
    ("pro", CanonicalField::ProprioceptionPathLength),
    ("visual", CanonicalField::VisualPathLength),
    ("visualscore", CanonicalField::VisualPathLength),
    ("visualpathlength", CanonicalField::VisualPathLength),
    ("vis", CanonicalField::VisualPathLength),
    ("vestibular", CanonicalField::VestibularPathLength),
    ("vestibularscore", CanonicalField::VestibularPathLength),
    ("vestibularpathlength", CanonicalField::VestibularPathLength),
    ("ves", CanonicalField::VestibularPathLength),
    // CTSIB / BTrackS percentiles. These carry the report-facing values and
    // must never collapse onto the path-length fields above.
    ("standardpercentile", CanonicalField::StandardScorePercentile),
    ("standardscorepercentile", CanonicalField::StandardScorePercentile),
    ("stdpercentile", CanonicalField::StandardScorePercentile),
    ("percentile1", CanonicalField::StandardScorePercentile),
    ("baselinestandardpercentile", CanonicalField::StandardScorePercentile),
    ("proprioceptionpercentile", CanonicalField::ProprioceptionScorePercentile),
    ("proprioceptionscorepercentile", CanonicalField::ProprioceptionScorePercentile),
    ("propercentile", CanonicalField::ProprioceptionScorePercentile),
    ("percentile2", CanonicalField::ProprioceptionScorePercentile),
    ("baselineproprioceptionpercentile", CanonicalField::ProprioceptionScorePercentile),
    ("visualpercentile", CanonicalField::VisualScorePercentile),
    ("visualscorepercentile", CanonicalField::VisualScorePercentile),
    ("vispercentile", CanonicalField::VisualScorePercentile),
    ("percentile3", CanonicalField::VisualScorePercentile),
    ("baselinevisualpercentile", CanonicalField::VisualScorePercentile),
    ("vestibularpercentile", CanonicalField::VestibularScorePercentile),
    ("vestibularscorepercentile", CanonicalField::VestibularScorePercentile),
    ("vespercentile", CanonicalField::VestibularScorePercentile),
    ("percentile4", CanonicalField::VestibularScorePercentile),
    ("baselinevestibularpercentile", CanonicalField::VestibularScorePercentile),
    // Creyos cognitive battery
    ("attentionpercentile", CanonicalField::AttentionPercentile),
    ("attention", CanonicalField::AttentionPercentile),
    ("deductivereasoningpercentile", CanonicalField::DeductiveReasoningPercentile),
    ("deductivereasoning", CanonicalField::DeductiveReasoningPercentile),
    ("episodicmemorypercentile", CanonicalField::EpisodicMemoryPercentile),
    ("episodicmemory", CanonicalField::EpisodicMemoryPercentile),
    ("mentalrotationpercentile", CanonicalField::MentalRotationPercentile),
    ("mentalrotation", CanonicalField::MentalRotationPercentile),
    ("planningpercentile", CanonicalField::PlanningPercentile),
    ("planning", CanonicalField::PlanningPercentile),
    ("polygonspercentile", CanonicalField::PolygonsPercentile),
    ("polygons", CanonicalField::PolygonsPercentile),
    ("responseinhibitionpercentile", CanonicalField::ResponseInhibitionPercentile),
    ("responseinhibition", CanonicalField::ResponseInhibitionPercentile),
    ("spatialshorttermmemorypercentile", CanonicalField::SpatialShortTermMemoryPercentile),
    ("spatialshorttermmemory", CanonicalField::SpatialShortTermMemoryPercentile),
    ("verbalreasoningpercentile", CanonicalField::VerbalReasoningPercentile),
    ("verbalreasoning", CanonicalField::VerbalReasoningPercentile),
    ("verbalshorttermmemorypercentile", CanonicalField::VerbalShortTermMemoryPercentile),
    ("verbalshorttermmemory", CanonicalField::VerbalShortTermMemoryPercentile),
    ("visuospatialworkingmemorypercentile", CanonicalField::VisuospatialWorkingMemoryPercentile),
    ("visuospatialworkingmemory", CanonicalField::VisuospatialWorkingMemoryPercentile),
    ("workingmemorypercentile", CanonicalField::WorkingMemoryPercentile),
    ("workingmemory", CanonicalField::WorkingMemoryPercentile),
    // Psychometric questionnaires
    ("rpq", CanonicalField::Rpq),
    ("rpqscore", CanonicalField::Rpq),
    ("rpqtotal", CanonicalField::Rpq),
    ("pcl5", CanonicalField::Pcl5),
    ("pcl5score", CanonicalField::Pcl5),
    ("psqi", CanonicalField::Psqi),
    ("psqiscore", CanonicalField::Psqi),
    ("phq9", CanonicalField::Phq9),
    ("phq9score", CanonicalField::Phq9),
    ("gad7", CanonicalField::Gad7),
    ("gad7score", CanonicalField::Gad7),
];
