/// Fixed cleaning rules and console strings shared across the crate

/// Youngest age that survives the quality gate (inclusive)
pub const MIN_ADULT_AGE: i64 = 18;

// Source location relative to the executable's directory
pub const DEFAULT_SOURCE_DIR: &str = "data";
pub const DEFAULT_SOURCE_SUBDIR: &str = "raw";
pub const DEFAULT_SOURCE_FILE: &str = "patients.json";

// Record keys the cleaning rules read
pub const NAME_KEY: &str = "name";
pub const AGE_KEY: &str = "age";
pub const GENDER_KEY: &str = "gender";
pub const DIAGNOSIS_KEY: &str = "diagnosis";

// Console output
pub const REPORT_HEADER: &str = "Cleaned Patient Data:";
pub const NO_VALID_PATIENTS: &str = "No valid patients found.";

pub const DEFAULT_LOG_DIRECTIVE: &str = "patient_cleaner=warn";
