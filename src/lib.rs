pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;

pub use app::{run, RunOutcome};
pub use error::{CleanerError, Result};
pub use pipeline::{clean_patient_data, CleaningOutcome, CleaningReport, CleaningStats, Pipeline};
pub use types::{DedupKey, PatientRecord, RawRecord};
