// QuoteDeck - app/load.rs
//
// Dataset transport: the single fallible step of the pipeline. Reads
// the TSV file from disk, validates encoding, and hands the text to the
// core ingestion engine. A failure here is terminal for the load
// attempt — no retry — and is surfaced to the caller once.

use crate::core::ingest;
use crate::core::model::IngestResult;
use crate::util::constants::MAX_DATASET_FILE_SIZE;
use crate::util::error::LoadError;
use std::fs;
use std::path::Path;

/// Load and ingest a dataset file.
///
/// Checks existence, refuses directories and oversized files, reads the
/// bytes, validates UTF-8, then runs the (total, never-failing)
/// ingestion. Malformed rows never surface here; they come back as
/// RepairNotes inside the result.
pub fn load_dataset(path: &Path) -> Result<IngestResult, LoadError> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if !metadata.is_file() {
        return Err(LoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > MAX_DATASET_FILE_SIZE {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_DATASET_FILE_SIZE,
        });
    }

    let bytes = fs::read(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })?;

    let result = ingest::ingest(&text);

    tracing::info!(
        file = %path.display(),
        rows = result.rows.len(),
        repairs = result.repairs.len(),
        header_skipped = result.header_skipped,
        "Dataset loaded"
    );

    Ok(result)
}
