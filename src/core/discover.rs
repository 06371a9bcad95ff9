use crate::domain::model::RecordFile;
use crate::utils::error::{Result, SalesError};
use crate::utils::validation::RECORD_FILE_NAME;
use std::path::Path;

/// Lists the sales record files (`NNNNNNNN.rcd`) directly inside `dir`
/// and checks their sequence numbers are contiguous.
///
/// Subdirectories and other file names are ignored. The returned list is
/// sorted by sequence number, which at fixed 8-digit width is the same as
/// lexicographic file-name order. Empty and single-file sets trivially
/// pass the sequence check.
pub fn discover_record_files(dir: &Path) -> Result<Vec<RecordFile>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !RECORD_FILE_NAME.is_match(&file_name) {
            continue;
        }
        let sequence: u32 = file_name[..8]
            .parse()
            .expect("record file name starts with 8 digits");
        files.push(RecordFile {
            sequence,
            file_name,
            path: entry.path(),
        });
    }

    files.sort_by_key(|f| f.sequence);

    for pair in files.windows(2) {
        if pair[1].sequence - pair[0].sequence != 1 {
            return Err(SalesError::NotSerialNumber);
        }
    }

    tracing::debug!("discovered {} record files in {}", files.len(), dir.display());
    Ok(files)
}
