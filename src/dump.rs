//! Loading health dumps from JSON.
//!
//! A dump is a single JSON array of objects. Anything else, including a
//! non-object element, fails the whole load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::DumpError;
use crate::record::HealthRecord;

/// Read and parse the dump at `path`.
pub fn load_dump(path: &Path) -> Result<Vec<HealthRecord>, DumpError> {
    let file = File::open(path).map_err(|source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_dump(BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "loaded health dump");
    Ok(records)
}

pub fn read_dump<R: Read>(reader: R) -> Result<Vec<HealthRecord>, DumpError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_dump(text: &str) -> Result<Vec<HealthRecord>, DumpError> {
    Ok(serde_json::from_str(text)?)
}
