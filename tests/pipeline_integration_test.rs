use anyhow::Result;
use sales_summary::{BatchEngine, SalesError, SummaryPipeline};
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    std::fs::write(dir.join(name), content)?;
    Ok(())
}

fn setup_references(dir: &Path) -> Result<()> {
    write_file(dir, "branch.lst", "001,Tokyo\n002,Osaka\n")?;
    write_file(dir, "commodity.lst", "AAA00001,Apple\nBBB00002,Banana\n")?;
    Ok(())
}

fn run(dir: &Path) -> sales_summary::Result<()> {
    let pipeline = SummaryPipeline::new(dir.to_path_buf());
    BatchEngine::new(pipeline).run()
}

#[test]
fn test_single_record_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;
    write_file(dir.path(), "00000001.rcd", "001\nAAA00001\n1500\n")?;

    run(dir.path())?;

    let branch_out = std::fs::read_to_string(dir.path().join("branch.out"))?;
    assert_eq!(branch_out, "001,Tokyo,1500\n002,Osaka,0\n");

    let commodity_out = std::fs::read_to_string(dir.path().join("commodity.out"))?;
    assert_eq!(commodity_out, "AAA00001,Apple,1500\nBBB00002,Banana,0\n");
    Ok(())
}

#[test]
fn test_totals_accumulate_across_files() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;
    write_file(dir.path(), "00000001.rcd", "001\nAAA00001\n1000\n")?;
    write_file(dir.path(), "00000002.rcd", "001\nBBB00002\n200\n")?;
    write_file(dir.path(), "00000003.rcd", "002\nAAA00001\n30\n")?;

    run(dir.path())?;

    let branch_out = std::fs::read_to_string(dir.path().join("branch.out"))?;
    assert_eq!(branch_out, "001,Tokyo,1200\n002,Osaka,30\n");

    let commodity_out = std::fs::read_to_string(dir.path().join("commodity.out"))?;
    assert_eq!(commodity_out, "AAA00001,Apple,1030\nBBB00002,Banana,200\n");
    Ok(())
}

#[test]
fn test_no_record_files_writes_zero_totals() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;

    run(dir.path())?;

    let branch_out = std::fs::read_to_string(dir.path().join("branch.out"))?;
    assert_eq!(branch_out, "001,Tokyo,0\n002,Osaka,0\n");
    Ok(())
}

#[test]
fn test_sequence_gap_fails_and_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;
    write_file(dir.path(), "00000001.rcd", "001\nAAA00001\n100\n")?;
    write_file(dir.path(), "00000003.rcd", "001\nAAA00001\n100\n")?;

    let err = run(dir.path()).unwrap_err();
    assert!(matches!(err, SalesError::NotSerialNumber));
    assert!(!dir.path().join("branch.out").exists());
    assert!(!dir.path().join("commodity.out").exists());
    Ok(())
}

#[test]
fn test_unknown_branch_code_names_the_file() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;
    write_file(dir.path(), "00000001.rcd", "999\nAAA00001\n100\n")?;

    let err = run(dir.path()).unwrap_err();
    assert!(err.to_string().contains("00000001.rcd"));
    assert!(matches!(err, SalesError::InvalidBranchCode { .. }));
    assert!(!dir.path().join("branch.out").exists());
    Ok(())
}

#[test]
fn test_non_numeric_amount_fails() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;
    write_file(dir.path(), "00000001.rcd", "001\nAAA00001\nabc\n")?;

    let err = run(dir.path()).unwrap_err();
    assert!(matches!(err, SalesError::NonNumericAmount { .. }));
    Ok(())
}

#[test]
fn test_missing_branch_reference_fails() -> Result<()> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "commodity.lst", "AAA00001,Apple\n")?;

    let err = run(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        SalesError::ReferenceNotFound { category: "branch" }
    ));
    Ok(())
}

#[test]
fn test_ceiling_aborts_whole_run() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;
    write_file(dir.path(), "00000001.rcd", "001\nAAA00001\n999999999\n")?;
    write_file(dir.path(), "00000002.rcd", "002\nAAA00001\n1\n")?;

    let err = run(dir.path()).unwrap_err();
    assert!(matches!(err, SalesError::TotalExceeded));
    assert!(!dir.path().join("branch.out").exists());
    Ok(())
}

#[test]
fn test_stale_outputs_are_overwritten() -> Result<()> {
    let dir = TempDir::new()?;
    setup_references(dir.path())?;
    write_file(dir.path(), "branch.out", "zzz,stale,0\n")?;
    write_file(dir.path(), "commodity.out", "zzz,stale,0\n")?;
    write_file(dir.path(), "00000001.rcd", "001\nAAA00001\n5\n")?;

    run(dir.path())?;

    let branch_out = std::fs::read_to_string(dir.path().join("branch.out"))?;
    assert!(!branch_out.contains("stale"));
    assert_eq!(branch_out, "001,Tokyo,5\n002,Osaka,0\n");
    Ok(())
}
