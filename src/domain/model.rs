use crate::utils::error::{Result, SalesError};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Accumulated totals must stay strictly below this ceiling.
pub const TOTAL_CEILING: u64 = 1_000_000_000;

/// One reference table: code -> name plus code -> running total.
///
/// Backed by `BTreeMap` so iteration, and therefore summary output, is
/// always sorted by code.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    category: &'static str,
    names: BTreeMap<String, String>,
    totals: BTreeMap<String, u64>,
}

impl ReferenceTable {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            names: BTreeMap::new(),
            totals: BTreeMap::new(),
        }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Registers a code with a zero-initialized total. A duplicate code
    /// overwrites the name and resets the total, matching the reference
    /// file semantics where the last line wins.
    pub fn insert(&mut self, code: String, name: String) {
        self.totals.insert(code.clone(), 0);
        self.names.insert(code, name);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn total(&self, code: &str) -> Option<u64> {
        self.totals.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The would-be total for `code` after adding `amount`, without
    /// mutating the table. Errors with `TotalExceeded` if the sum reaches
    /// the ceiling or overflows.
    pub fn tentative_total(&self, code: &str, amount: u64) -> Result<u64> {
        let current = self.totals.get(code).copied().unwrap_or(0);
        let sum = current
            .checked_add(amount)
            .ok_or(SalesError::TotalExceeded)?;
        if sum >= TOTAL_CEILING {
            return Err(SalesError::TotalExceeded);
        }
        Ok(sum)
    }

    pub fn commit_total(&mut self, code: &str, total: u64) {
        self.totals.insert(code.to_string(), total);
    }

    /// Rows in code order: (code, name, total).
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, u64)> + '_ {
        self.names.iter().map(|(code, name)| {
            let total = self.totals.get(code).copied().unwrap_or(0);
            (code.as_str(), name.as_str(), total)
        })
    }
}

/// A discovered sales record file, read once during aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub sequence: u32,
    pub file_name: String,
    pub path: PathBuf,
}

/// Parsed content of one record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub branch_code: String,
    pub commodity_code: String,
    pub amount: u64,
}

/// Everything the extract stage hands to the transform stage.
#[derive(Debug)]
pub struct Extraction {
    pub branches: ReferenceTable,
    pub commodities: ReferenceTable,
    pub record_files: Vec<RecordFile>,
}

/// Final totals handed to the load stage.
#[derive(Debug)]
pub struct SummaryTables {
    pub branches: ReferenceTable,
    pub commodities: ReferenceTable,
}
