use chrono::{SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::Path;
use supplydesk_types::{Supplier, SupplierDraft, SupplierId};

use crate::Result;
use crate::queries::supplier;
use crate::schema;

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "opened supplier database");

        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    // Supplier operations

    /// Insert a draft as-is and return the assigned id. Callers apply
    /// validation and creation defaults first.
    pub fn insert_supplier(&self, draft: &SupplierDraft) -> Result<SupplierId> {
        let id = supplier::insert(&self.conn, draft, &timestamp())?;
        tracing::debug!(%id, company = ?draft.company_name, "inserted supplier");
        Ok(id)
    }

    pub fn update_supplier(&self, id: SupplierId, draft: &SupplierDraft) -> Result<()> {
        supplier::update(&self.conn, id, draft, &timestamp())?;
        tracing::debug!(%id, "updated supplier");
        Ok(())
    }

    /// Soft delete. Idempotent; returns whether the status actually changed.
    pub fn deactivate_supplier(&self, id: SupplierId, updated_by: &str) -> Result<bool> {
        let changed = supplier::deactivate(&self.conn, id, updated_by, &timestamp())?;
        tracing::debug!(%id, changed, "deactivated supplier");
        Ok(changed)
    }

    pub fn record_scores(
        &self,
        id: SupplierId,
        on_time_rate: Option<f64>,
        reliability_score: Option<f64>,
    ) -> Result<()> {
        supplier::record_scores(&self.conn, id, on_time_rate, reliability_score)
    }

    pub fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>> {
        supplier::get_by_id(&self.conn, id)
    }

    pub fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        supplier::list(&self.conn)
    }

    pub fn count_suppliers(&self) -> Result<usize> {
        supplier::count(&self.conn)
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
