use crate::constants::MIN_ADULT_AGE;
use crate::types::PatientRecord;

/// Quality gate decision for a normalized record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityDecision {
    Accept,
    /// The coerced age is below the adult threshold
    RejectUnderAge,
}

/// Age gate applied after normalization.
#[derive(Debug, Clone, Copy)]
pub struct AgeGate {
    min_age: i64,
}

impl Default for AgeGate {
    fn default() -> Self {
        Self {
            min_age: MIN_ADULT_AGE,
        }
    }
}

impl AgeGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_age(&self) -> i64 {
        self.min_age
    }

    pub fn assess(&self, record: &PatientRecord) -> QualityDecision {
        if record.age() >= self.min_age {
            QualityDecision::Accept
        } else {
            QualityDecision::RejectUnderAge
        }
    }

    pub fn keep(&self, record: &PatientRecord) -> bool {
        self.assess(record) == QualityDecision::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::normalize::normalize_record;
    use serde_json::{json, Value};

    fn patient(age: Value) -> PatientRecord {
        let Value::Object(raw) = json!({"name": "x", "age": age}) else {
            unreachable!()
        };
        normalize_record(raw)
    }

    #[test]
    fn threshold_is_inclusive() {
        let gate = AgeGate::new();
        assert_eq!(gate.min_age(), 18);
        assert!(gate.keep(&patient(json!(18))));
        assert!(gate.keep(&patient(json!("18"))));
        assert!(gate.keep(&patient(json!(90))));
    }

    #[test]
    fn minors_and_unusable_ages_are_rejected() {
        let gate = AgeGate::new();
        assert_eq!(gate.assess(&patient(json!(17))), QualityDecision::RejectUnderAge);
        assert_eq!(gate.assess(&patient(json!("15"))), QualityDecision::RejectUnderAge);
        assert_eq!(gate.assess(&patient(json!("abc"))), QualityDecision::RejectUnderAge);
        assert_eq!(gate.assess(&patient(json!(17.9))), QualityDecision::RejectUnderAge);
        assert_eq!(gate.assess(&patient(Value::Null)), QualityDecision::RejectUnderAge);
    }
}
