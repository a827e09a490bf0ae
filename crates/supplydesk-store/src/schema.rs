use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 3;

// The suppliers table is the system of record. Older layouts are upgraded in
// place by adding the missing columns; rows are never dropped.
// Every column except id is nullable; sparse rows are valid suppliers.

/// Every column besides id, checked against older layouts on upgrade
const COLUMNS: &[(&str, &str)] = &[
    ("supplier_code", "TEXT"),
    ("company_name", "TEXT"),
    ("name", "TEXT"),
    ("contact_person", "TEXT"),
    ("email", "TEXT"),
    ("phone", "TEXT"),
    ("address", "TEXT"),
    ("category", "TEXT"),
    ("payment_terms", "TEXT"),
    ("importance_level", "TEXT"),
    ("status", "TEXT"),
    ("delivery_day", "INTEGER"),
    ("total_orders", "INTEGER"),
    ("late_deliveries", "INTEGER"),
    ("on_time_rate", "REAL"),
    ("reliability_score", "REAL"),
    ("created_at", "TEXT"),
    ("updated_at", "TEXT"),
    ("updated_by", "TEXT"),
];

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(Error::Query(format!(
            "database schema v{} is newer than this build supports (v{})",
            current_version, SCHEMA_VERSION
        )));
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            supplier_code TEXT,
            company_name TEXT,
            name TEXT,
            contact_person TEXT,
            email TEXT,
            phone TEXT,
            address TEXT,
            category TEXT,
            payment_terms TEXT,
            importance_level TEXT,
            status TEXT,
            delivery_day INTEGER,
            total_orders INTEGER,
            late_deliveries INTEGER,
            on_time_rate REAL,
            reliability_score REAL,
            created_at TEXT,
            updated_at TEXT,
            updated_by TEXT
        );
        "#,
    )?;

    if current_version < SCHEMA_VERSION {
        let added = add_missing_columns(conn)?;
        if current_version != 0 {
            tracing::warn!(
                from = current_version,
                to = SCHEMA_VERSION,
                added = ?added,
                "upgraded supplier schema"
            );
        }
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_suppliers_status ON suppliers(status);
        CREATE INDEX IF NOT EXISTS idx_suppliers_code ON suppliers(supplier_code);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn add_missing_columns(conn: &Connection) -> Result<Vec<&'static str>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('suppliers')")?;
    let existing = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut added = Vec::new();
    for (column, sql_type) in COLUMNS {
        if existing.iter().any(|name| name == column) {
            continue;
        }
        conn.execute(
            &format!("ALTER TABLE suppliers ADD COLUMN {} {}", column, sql_type),
            [],
        )?;
        added.push(*column);
    }
    Ok(added)
}
