use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::constants::NO_VALID_PATIENTS;
use crate::error::Result;
use crate::pipeline::ingestion::{load_patient_data, LoadedSource};
use crate::pipeline::{CleaningOutcome, Pipeline};
use crate::report::report;
use crate::types::PatientRecord;

/// How a run ended. Every variant is a normal termination.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Nothing at the source path; the loader already printed the error line
    SourceMissing(PathBuf),
    /// The source parsed to an empty array
    EmptySource,
    /// Records were loaded but none survived cleaning
    NoValidPatients,
    /// The cleaned records, as printed
    Reported(Vec<PatientRecord>),
}

/// Load → clean → report against `source`, writing console lines to `out`.
///
/// Only a malformed source (or an I/O failure other than not-found) is an error.
#[instrument(skip(source, out), fields(source = %source.display()))]
pub fn run<W: Write>(source: &Path, out: &mut W) -> Result<RunOutcome> {
    let records = match load_patient_data(source, out)? {
        LoadedSource::NotFound => return Ok(RunOutcome::SourceMissing(source.to_path_buf())),
        LoadedSource::Records(records) if records.is_empty() => {
            info!("Patient source is empty");
            return Ok(RunOutcome::EmptySource);
        }
        LoadedSource::Records(records) => records,
    };

    match Pipeline::new().run(records).outcome {
        CleaningOutcome::NoValidPatients => {
            writeln!(out, "{NO_VALID_PATIENTS}")?;
            Ok(RunOutcome::NoValidPatients)
        }
        CleaningOutcome::Cleaned(cleaned) => {
            report(&cleaned, out)?;
            Ok(RunOutcome::Reported(cleaned))
        }
    }
}
