//! Assertions over the JSON envelope printed by `--format json`.

use anyhow::{Context, Result};
use serde_json::Value;

fn suppliers(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["suppliers"]
        .as_array()
        .context("Expected 'content.suppliers' array in JSON")
}

/// Assert the number of suppliers on the rendered page.
pub fn assert_supplier_count(json: &Value, expected: usize) -> Result<()> {
    let rows = suppliers(json)?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} suppliers, got {}", expected, rows.len());
    }

    Ok(())
}

/// Assert the rendered page lists exactly these company names, in order.
pub fn assert_company_order(json: &Value, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = suppliers(json)?
        .iter()
        .map(|s| s["company_name"].as_str().unwrap_or(""))
        .collect();

    if names != expected {
        anyhow::bail!("Expected companies {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert `total_count` and `page_count` of a list response.
pub fn assert_counts(json: &Value, total: u64, pages: u64) -> Result<()> {
    let content = &json["content"];
    let actual_total = content["total_count"]
        .as_u64()
        .context("Expected 'content.total_count'")?;
    let actual_pages = content["page_count"]
        .as_u64()
        .context("Expected 'content.page_count'")?;

    if (actual_total, actual_pages) != (total, pages) {
        anyhow::bail!(
            "Expected total {} over {} pages, got {} over {}",
            total,
            pages,
            actual_total,
            actual_pages
        );
    }

    Ok(())
}

/// Assert every listed supplier has the given status.
pub fn assert_all_status(json: &Value, status: &str) -> Result<()> {
    for (i, row) in suppliers(json)?.iter().enumerate() {
        let actual = row["status"]
            .as_str()
            .with_context(|| format!("Supplier {} missing status", i))?;

        if actual != status {
            anyhow::bail!("Supplier {} has status {} but expected {}", i, actual, status);
        }
    }

    Ok(())
}
