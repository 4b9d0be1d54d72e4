//! Load and store flat binary dump files
//!
//! A dump is a headerless array of [`StatRecord::SIZE`]-byte records; the
//! record count is derived from the file size alone. A zero-length file is
//! a valid empty dump. Any size that is not a whole number of records is
//! reported as corrupt before any record is handed out.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::StatRecord;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("dump i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt dump {path}: {len} bytes is not a multiple of the {record_size}-byte record size")]
    Truncated {
        path: PathBuf,
        len: u64,
        record_size: usize,
    },
}

impl DumpError {
    fn io(path: &Path, source: io::Error) -> Self {
        DumpError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read every record from `path`.
///
/// Errors out without returning partial data if the file is unreadable or
/// its size is not a whole number of records.
pub fn load_dump(path: &Path) -> Result<Vec<StatRecord>, DumpError> {
    let file = File::open(path).map_err(|e| DumpError::io(path, e))?;
    let len = file.metadata().map_err(|e| DumpError::io(path, e))?.len();

    if len % StatRecord::SIZE as u64 != 0 {
        return Err(DumpError::Truncated {
            path: path.to_path_buf(),
            len,
            record_size: StatRecord::SIZE,
        });
    }

    let count = (len / StatRecord::SIZE as u64) as usize;
    let mut records = Vec::with_capacity(count);
    let mut reader = BufReader::new(file);
    let mut buf = [0u8; StatRecord::SIZE];

    for _ in 0..count {
        reader
            .read_exact(&mut buf)
            .map_err(|e| DumpError::io(path, e))?;
        records.push(StatRecord::from_bytes(&buf));
    }

    Ok(records)
}

/// Write `records` to `path`, truncating any existing file.
///
/// An empty slice produces a valid zero-length dump.
pub fn store_dump(path: &Path, records: &[StatRecord]) -> Result<(), DumpError> {
    let file = File::create(path).map_err(|e| DumpError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writer
            .write_all(&record.to_bytes())
            .map_err(|e| DumpError::io(path, e))?;
    }

    writer.flush().map_err(|e| DumpError::io(path, e))
}
