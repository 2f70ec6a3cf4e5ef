use std::io::{self, Write};

use serde_json::Value;

use crate::constants::REPORT_HEADER;
use crate::types::PatientRecord;

/// Writes the header followed by one `Name: .., Age: .., Diagnosis: ..` line per record.
///
/// Gender stays in the data but is not printed.
pub fn report<W: Write>(records: &[PatientRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    for record in records {
        writeln!(
            out,
            "Name: {}, Age: {}, Diagnosis: {}",
            record.name(),
            record.age(),
            display_value(record.diagnosis())
        )?;
    }
    out.flush()
}

// Text prints bare; other JSON values print as compact JSON; absent or null prints empty
fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
