use crate::domain::model::{RecordFile, ReferenceTable, SalesRecord};
use crate::utils::error::{Result, SalesError};
use crate::utils::validation::AMOUNT;

/// Parses one record file: exactly three lines, in order branch code,
/// commodity code, amount.
pub fn parse_record(file: &RecordFile) -> Result<SalesRecord> {
    let content = std::fs::read_to_string(&file.path)?;
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() != 3 {
        return Err(SalesError::InvalidRecordFormat {
            file_name: file.file_name.clone(),
        });
    }
    if !AMOUNT.is_match(lines[2]) {
        return Err(SalesError::NonNumericAmount {
            file_name: file.file_name.clone(),
        });
    }
    let amount = lines[2].parse().map_err(|_| SalesError::NonNumericAmount {
        file_name: file.file_name.clone(),
    })?;
    Ok(SalesRecord {
        branch_code: lines[0].to_string(),
        commodity_code: lines[1].to_string(),
        amount,
    })
}

/// Accumulates every record file into the branch and commodity tables.
///
/// Records are processed in sequence order and the first invalid record
/// aborts the run. Both tentative sums are checked against the ceiling
/// before either table is mutated, so a rejected record leaves both
/// tables untouched.
pub fn aggregate(
    record_files: &[RecordFile],
    branches: &mut ReferenceTable,
    commodities: &mut ReferenceTable,
) -> Result<()> {
    for file in record_files {
        let record = parse_record(file)?;

        if !branches.contains(&record.branch_code) {
            return Err(SalesError::InvalidBranchCode {
                file_name: file.file_name.clone(),
            });
        }
        if !commodities.contains(&record.commodity_code) {
            return Err(SalesError::InvalidCommodityCode {
                file_name: file.file_name.clone(),
            });
        }

        let branch_total = branches.tentative_total(&record.branch_code, record.amount)?;
        let commodity_total =
            commodities.tentative_total(&record.commodity_code, record.amount)?;
        branches.commit_total(&record.branch_code, branch_total);
        commodities.commit_total(&record.commodity_code, commodity_total);

        tracing::debug!(
            "{}: branch {} -> {}, commodity {} -> {}",
            file.file_name,
            record.branch_code,
            branch_total,
            record.commodity_code,
            commodity_total
        );
    }
    Ok(())
}
