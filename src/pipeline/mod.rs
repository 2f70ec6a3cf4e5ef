pub mod conflation;
pub mod ingestion;
pub mod normalize;
pub mod quality_gate;

use metrics::counter;
use tracing::{debug, info, instrument};

use crate::types::{PatientRecord, RawRecord};
use conflation::Deduplicator;
use normalize::normalize_record;
use quality_gate::{AgeGate, QualityDecision};

/// Result of cleaning one batch of raw records
#[derive(Debug, Clone, PartialEq)]
pub enum CleaningOutcome {
    /// Surviving records in source order of first occurrence
    Cleaned(Vec<PatientRecord>),
    /// Every record was filtered or deduplicated away (or there were none)
    NoValidPatients,
}

#[cfg(test)]
impl CleaningOutcome {
    pub fn records(&self) -> &[PatientRecord] {
        match self {
            CleaningOutcome::Cleaned(records) => records,
            CleaningOutcome::NoValidPatients => &[],
        }
    }
}

/// Per-run counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    pub total: usize,
    pub under_age: usize,
    pub duplicates: usize,
    pub kept: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleaningReport {
    pub outcome: CleaningOutcome,
    pub stats: CleaningStats,
}

/// Single-pass cleaning: normalize, age gate, deduplicate.
#[derive(Debug, Default)]
pub struct Pipeline {
    gate: AgeGate,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, records), fields(total = records.len()))]
    pub fn run(&self, records: Vec<RawRecord>) -> CleaningReport {
        // scoped to this run
        let mut dedup = Deduplicator::new();
        let mut cleaned = Vec::new();
        let mut stats = CleaningStats {
            total: records.len(),
            ..CleaningStats::default()
        };

        for raw in records {
            let record = normalize_record(raw);

            if self.gate.assess(&record) == QualityDecision::RejectUnderAge {
                debug!("Skipping patient under {}: age {}", self.gate.min_age(), record.age());
                stats.under_age += 1;
                continue;
            }

            if dedup.is_duplicate(&record) {
                stats.duplicates += 1;
                continue;
            }

            cleaned.push(record);
        }

        stats.kept = cleaned.len();
        debug!("{} distinct records registered", dedup.len());
        info!(
            "Cleaned {} patients ({} under age, {} duplicates, {} kept)",
            stats.total, stats.under_age, stats.duplicates, stats.kept
        );
        counter!("patients_loaded_total").increment(stats.total as u64);
        counter!("patients_under_age_total").increment(stats.under_age as u64);
        counter!("patients_duplicate_total").increment(stats.duplicates as u64);
        counter!("patients_kept_total").increment(stats.kept as u64);

        let outcome = if cleaned.is_empty() {
            CleaningOutcome::NoValidPatients
        } else {
            CleaningOutcome::Cleaned(cleaned)
        };

        CleaningReport { outcome, stats }
    }
}

/// Convenience wrapper over [`Pipeline::run`] with the fixed rule set
pub fn clean_patient_data(records: Vec<RawRecord>) -> CleaningOutcome {
    Pipeline::new().run(records).outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn raws(value: Value) -> Vec<RawRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn keeps_first_adult_occurrence_in_order() {
        let report = Pipeline::new().run(raws(json!([
            {"name": "zed", "age": 50, "diagnosis": "a"},
            {"name": "john smith", "age": "32", "gender": "male", "diagnosis": "flu"},
            {"name": "jane doe", "age": "15", "gender": "female", "diagnosis": "cold"},
            {"name": "zed", "age": "50", "diagnosis": "a"},
            {"name": "amy", "age": 18, "diagnosis": "b"}
        ])));

        let names: Vec<&str> = report.outcome.records().iter().map(PatientRecord::name).collect();
        assert_eq!(names, ["Zed", "John Smith", "Amy"]);
        assert_eq!(
            report.stats,
            CleaningStats { total: 5, under_age: 1, duplicates: 1, kept: 3 }
        );
    }

    #[test]
    fn minors_are_never_registered_as_seen() {
        // an under-age record must not shadow anything
        let report = Pipeline::new().run(raws(json!([
            {"name": "a", "age": 10},
            {"name": "a", "age": 10},
            {"name": "b", "age": 30}
        ])));
        assert_eq!(report.stats.under_age, 2);
        assert_eq!(report.stats.duplicates, 0);
        assert_eq!(report.outcome.records().len(), 1);
    }

    #[test]
    fn all_minors_yield_no_valid_patients() {
        let outcome = clean_patient_data(raws(json!([
            {"name": "a", "age": "17"},
            {"name": "b", "age": "abc"},
            {"name": "c"}
        ])));
        assert_eq!(outcome, CleaningOutcome::NoValidPatients);
        assert!(outcome.records().is_empty());
    }

    #[test]
    fn empty_input_yields_no_valid_patients() {
        assert_eq!(clean_patient_data(Vec::new()), CleaningOutcome::NoValidPatients);
    }
}
