use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::str::FromStr;
use supplydesk_types::{Supplier, SupplierDraft, SupplierId, SupplierStatus};

use crate::{Error, Result};

const SUPPLIER_COLUMNS: &str = "id, supplier_code, company_name, name, contact_person, email, \
     phone, address, category, payment_terms, importance_level, status, delivery_day, \
     total_orders, late_deliveries, on_time_rate, reliability_score, created_at, updated_at, \
     updated_by";

pub fn insert(conn: &Connection, draft: &SupplierDraft, now: &str) -> Result<SupplierId> {
    conn.execute(
        r#"
        INSERT INTO suppliers (supplier_code, company_name, name, contact_person, email, phone,
                               address, category, payment_terms, importance_level, status,
                               delivery_day, total_orders, late_deliveries,
                               created_at, updated_at, updated_by)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?15, ?16)
        "#,
        params![
            &draft.supplier_code,
            &draft.company_name,
            &draft.name,
            &draft.contact_person,
            &draft.email,
            &draft.phone,
            &draft.address,
            &draft.category,
            &draft.payment_terms,
            draft.importance_level.map(|l| l.as_str()),
            draft.status.map(|s| s.as_str()),
            draft.delivery_day,
            draft.total_orders,
            draft.late_deliveries,
            now,
            &draft.updated_by,
        ],
    )?;

    Ok(SupplierId::new(conn.last_insert_rowid()))
}

/// Overwrite every draft-owned column. Scores and `created_at` are kept.
pub fn update(conn: &Connection, id: SupplierId, draft: &SupplierDraft, now: &str) -> Result<()> {
    let changed = conn.execute(
        r#"
        UPDATE suppliers SET
            supplier_code = ?2,
            company_name = ?3,
            name = ?4,
            contact_person = ?5,
            email = ?6,
            phone = ?7,
            address = ?8,
            category = ?9,
            payment_terms = ?10,
            importance_level = ?11,
            status = ?12,
            delivery_day = ?13,
            total_orders = ?14,
            late_deliveries = ?15,
            updated_at = ?16,
            updated_by = ?17
        WHERE id = ?1
        "#,
        params![
            id.get(),
            &draft.supplier_code,
            &draft.company_name,
            &draft.name,
            &draft.contact_person,
            &draft.email,
            &draft.phone,
            &draft.address,
            &draft.category,
            &draft.payment_terms,
            draft.importance_level.map(|l| l.as_str()),
            draft.status.map(|s| s.as_str()),
            draft.delivery_day,
            draft.total_orders,
            draft.late_deliveries,
            now,
            &draft.updated_by,
        ],
    )?;

    if changed == 0 {
        return Err(Error::NotFound(id));
    }
    Ok(())
}

/// Mark a supplier Inactive. Returns false when it already was.
pub fn deactivate(conn: &Connection, id: SupplierId, updated_by: &str, now: &str) -> Result<bool> {
    let changed = conn.execute(
        r#"
        UPDATE suppliers SET status = ?2, updated_at = ?3, updated_by = ?4
        WHERE id = ?1 AND (status IS NULL OR status != ?2)
        "#,
        params![id.get(), SupplierStatus::Inactive.as_str(), now, updated_by],
    )?;

    if changed > 0 {
        return Ok(true);
    }
    if exists(conn, id)? {
        Ok(false)
    } else {
        Err(Error::NotFound(id))
    }
}

/// Store the figures produced by the external scoring job.
pub fn record_scores(
    conn: &Connection,
    id: SupplierId,
    on_time_rate: Option<f64>,
    reliability_score: Option<f64>,
) -> Result<()> {
    let changed = conn.execute(
        "UPDATE suppliers SET on_time_rate = ?2, reliability_score = ?3 WHERE id = ?1",
        params![id.get(), on_time_rate, reliability_score],
    )?;

    if changed == 0 {
        return Err(Error::NotFound(id));
    }
    Ok(())
}

pub fn get_by_id(conn: &Connection, id: SupplierId) -> Result<Option<Supplier>> {
    let sql = format!("SELECT {} FROM suppliers WHERE id = ?1", SUPPLIER_COLUMNS);
    let supplier = conn
        .query_row(&sql, [id.get()], read_supplier)
        .optional()?;
    Ok(supplier)
}

/// Every supplier, Active and Inactive, in insertion order
pub fn list(conn: &Connection) -> Result<Vec<Supplier>> {
    let sql = format!("SELECT {} FROM suppliers ORDER BY id ASC", SUPPLIER_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;

    let suppliers = stmt
        .query_map([], read_supplier)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(suppliers)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM suppliers", [], |row| row.get(0))?;
    usize::try_from(count).map_err(|_| Error::Query(format!("negative row count: {}", count)))
}

fn exists(conn: &Connection, id: SupplierId) -> Result<bool> {
    let found = conn
        .query_row("SELECT 1 FROM suppliers WHERE id = ?1", [id.get()], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

fn read_supplier(row: &Row<'_>) -> rusqlite::Result<Supplier> {
    Ok(Supplier {
        id: SupplierId::new(row.get(0)?),
        supplier_code: row.get(1)?,
        company_name: row.get(2)?,
        name: row.get(3)?,
        contact_person: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        address: row.get(7)?,
        category: row.get(8)?,
        payment_terms: row.get(9)?,
        importance_level: parse_column(row, 10)?,
        status: parse_column(row, 11)?,
        delivery_day: row.get(12)?,
        total_orders: row.get(13)?,
        late_deliveries: row.get(14)?,
        on_time_rate: row.get(15)?,
        reliability_score: row.get(16)?,
        created_at: row.get(17)?,
        updated_at: row.get(18)?,
        updated_by: row.get(19)?,
    })
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr<Err = supplydesk_types::Error>,
{
    row.get::<_, Option<String>>(idx)?
        .map(|text| {
            text.parse::<T>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
        })
        .transpose()
}
