use supplydesk_store::Database;
use supplydesk_types::{Supplier, SupplierDraft, SupplierId};

use crate::Result;

/// Data-access seam for the supplier book.
///
/// Implementations own persistence; callers never patch records locally and
/// re-read through `list_suppliers` after a write.
pub trait SupplierCatalog {
    fn list_suppliers(&self) -> Result<Vec<Supplier>>;

    fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>>;

    fn create_supplier(&self, draft: &SupplierDraft) -> Result<Supplier>;

    /// Full replacement of the draft-owned fields
    fn update_supplier(&self, id: SupplierId, draft: &SupplierDraft) -> Result<Supplier>;

    /// Move a supplier to Inactive, recording who did it. Repeating it is a no-op.
    fn soft_delete_supplier(&self, id: SupplierId, updated_by: &str) -> Result<()>;
}

/// Catalog backed by the local SQLite store
pub struct LocalCatalog {
    db: Database,
}

impl LocalCatalog {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn reload(&self, id: SupplierId) -> Result<Supplier> {
        self.db
            .get_supplier(id)?
            .ok_or_else(|| supplydesk_store::Error::NotFound(id).into())
    }
}

impl SupplierCatalog for LocalCatalog {
    fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        Ok(self.db.list_suppliers()?)
    }

    fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>> {
        Ok(self.db.get_supplier(id)?)
    }

    fn create_supplier(&self, draft: &SupplierDraft) -> Result<Supplier> {
        let id = self.db.insert_supplier(draft)?;
        self.reload(id)
    }

    fn update_supplier(&self, id: SupplierId, draft: &SupplierDraft) -> Result<Supplier> {
        self.db.update_supplier(id, draft)?;
        self.reload(id)
    }

    fn soft_delete_supplier(&self, id: SupplierId, updated_by: &str) -> Result<()> {
        self.db.deactivate_supplier(id, updated_by)?;
        Ok(())
    }
}
