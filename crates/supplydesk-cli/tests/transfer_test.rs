//! CSV export and import through the CLI.

mod common;

use anyhow::Result;
use common::grocery_world;
use supplydesk_testing::{TestWorld, assertions};

#[test]
fn test_export_to_stdout_is_raw_csv() -> Result<()> {
    let world = grocery_world()?;

    let result = world.run(&["export", "csv"])?;

    assert!(result.success());
    let mut lines = result.stdout().lines();
    assert_eq!(
        lines.next(),
        Some(
            "SupplierCode,Name,CompanyName,ContactPerson,Email,Phone,Category,PaymentTerms,Priority,Status,LeadTime"
        )
    );
    assert_eq!(lines.count(), 5);

    Ok(())
}

#[test]
fn test_export_to_file_then_import_elsewhere() -> Result<()> {
    let source = grocery_world()?;
    let output = source.temp_dir().join("book.csv");
    let output_arg = output.to_string_lossy().to_string();

    let json = source.run_json(&["export", "csv", "--output", &output_arg])?;
    assert_eq!(json["content"]["exported_count"], 5);
    assert!(output.exists());

    let target = TestWorld::new();
    target.run_json(&["init"])?;
    let json = target.run_json(&["import", "csv", &output_arg])?;
    assert_eq!(json["content"]["created"].as_array().map(Vec::len), Some(5));

    let list = target.run_json(&["supplier", "list", "--category", "Dairy"])?;
    assertions::assert_company_order(&list, &["Lanka Dairy"])?;
    assert_eq!(list["content"]["suppliers"][0]["supplier_code"], "SUP-100001");
    assert_eq!(list["content"]["suppliers"][0]["lead_time_days"], 2);

    Ok(())
}

#[test]
fn test_import_skips_bad_rows() -> Result<()> {
    let world = TestWorld::new();
    world.run_json(&["init"])?;
    let path = world.write_file(
        "mixed.csv",
        "CompanyName,Priority,LeadTime\nLanka Dairy,Critical,2\n,Normal,1\nGreen Leaf,Urgent,1\n",
    )?;

    let json = world.run_json(&["import", "csv", &path.to_string_lossy()])?;

    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["content"]["created"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["content"]["rejected"][0]["line"], 3);
    assert_eq!(json["content"]["rejected"][1]["line"], 4);

    Ok(())
}

#[test]
fn test_import_missing_file() -> Result<()> {
    let world = TestWorld::new();
    world.run_json(&["init"])?;

    let result = world.run(&["import", "csv", "does-not-exist.csv"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to open"));

    Ok(())
}
