use crate::domain::model::ReferenceTable;
use crate::utils::error::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    code: &'a str,
    name: &'a str,
    total: u64,
}

/// Writes one `code,name,total` line per reference entry, sorted by code,
/// creating or truncating the output file.
pub fn write_summary(dir: &Path, file_name: &str, table: &ReferenceTable) -> Result<()> {
    let path = dir.join(file_name);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;

    for (code, name, total) in table.rows() {
        writer.serialize(SummaryRow { code, name, total })?;
    }
    writer.flush()?;

    tracing::debug!("wrote {} {} rows to {}", table.len(), table.category(), file_name);
    Ok(())
}
