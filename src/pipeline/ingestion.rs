use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::types::RawRecord;

/// What the loader found at the source path
#[derive(Debug)]
pub enum LoadedSource {
    /// The source was read and parsed; the array may be empty
    Records(Vec<RawRecord>),
    /// Nothing exists at the source path
    NotFound,
}

impl LoadedSource {
    /// The parsed records, or an empty sequence when the source was missing
    pub fn into_records(self) -> Vec<RawRecord> {
        match self {
            LoadedSource::Records(records) => records,
            LoadedSource::NotFound => Vec::new(),
        }
    }
}

/// Reads the patient array at `path`.
///
/// A missing file is reported on `out` as `Error: File not found at <path>`
/// and yields [`LoadedSource::NotFound`]. Any other I/O failure and any
/// content that is not a JSON array of objects is returned as an error.
#[instrument(skip(path, out), fields(path = %path.display()))]
pub fn load_patient_data<W: Write>(path: &Path, out: &mut W) -> Result<LoadedSource> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Patient source not found");
            writeln!(out, "Error: File not found at {}", path.display())?;
            return Ok(LoadedSource::NotFound);
        }
        Err(e) => return Err(e.into()),
    };

    debug!("Parsing patient source");
    // The handle is dropped when the reader goes out of scope, before any cleaning runs
    let records: Vec<RawRecord> = serde_json::from_reader(BufReader::new(file))?;
    info!("Loaded {} raw patient records", records.len());

    Ok(LoadedSource::Records(records))
}
