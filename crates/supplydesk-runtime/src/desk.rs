use chrono::Utc;
use supplydesk_engine::{SupplierAnalytics, SupplierListing};
use supplydesk_types::{Supplier, SupplierDraft, SupplierId, SupplierQuery};

use crate::Result;
use crate::catalog::SupplierCatalog;

/// Client-side view of the supplier book.
///
/// Holds the last snapshot fetched from the catalog. Every successful write
/// is followed by a full re-fetch, so derived views (`listing`, `categories`,
/// `analytics`) always reflect what the catalog confirmed. The desk's operator
/// is the only source of `updated_by`.
pub struct SupplierDesk<C> {
    catalog: C,
    operator: String,
    snapshot: Vec<Supplier>,
}

impl<C: SupplierCatalog> SupplierDesk<C> {
    /// Fetch the initial snapshot.
    pub fn load(catalog: C, operator: impl Into<String>) -> Result<Self> {
        let mut desk = Self {
            catalog,
            operator: operator.into(),
            snapshot: Vec::new(),
        };
        desk.refresh()?;
        Ok(desk)
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.snapshot = self.catalog.list_suppliers()?;
        tracing::debug!(count = self.snapshot.len(), "refreshed supplier snapshot");
        Ok(())
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.snapshot
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn find(&self, id: SupplierId) -> Option<&Supplier> {
        self.snapshot.iter().find(|s| s.id == id)
    }

    pub fn listing(&self, query: &SupplierQuery) -> SupplierListing<'_> {
        supplydesk_engine::compute(&self.snapshot, query)
    }

    pub fn categories(&self) -> Vec<String> {
        supplydesk_engine::observed_categories(&self.snapshot)
    }

    pub fn analytics(&self) -> SupplierAnalytics {
        supplydesk_engine::summarize(&self.snapshot)
    }

    /// Validate, apply creation defaults, create, then re-fetch.
    pub fn create(&mut self, draft: SupplierDraft) -> Result<Supplier> {
        let created = self.insert(draft)?;
        self.refresh()?;
        Ok(created)
    }

    /// Validate, apply creation defaults and create without re-fetching.
    ///
    /// For bulk writes; the caller runs `refresh` once when done, and the
    /// snapshot is stale until then.
    pub fn insert(&self, mut draft: SupplierDraft) -> Result<Supplier> {
        draft.validate()?;
        draft.updated_by = Some(self.operator.clone());
        let draft = draft.with_defaults(Utc::now());

        let created = self.catalog.create_supplier(&draft)?;
        tracing::info!(id = %created.id, code = ?created.supplier_code, "created supplier");
        Ok(created)
    }

    /// Validate and replace a supplier's fields, then re-fetch.
    pub fn update(&mut self, id: SupplierId, mut draft: SupplierDraft) -> Result<Supplier> {
        draft.validate()?;
        draft.updated_by = Some(self.operator.clone());

        let updated = self.catalog.update_supplier(id, &draft)?;
        tracing::info!(id = %id, "updated supplier");

        self.refresh()?;
        Ok(updated)
    }

    /// Soft delete, then re-fetch.
    pub fn deactivate(&mut self, id: SupplierId) -> Result<()> {
        self.catalog.soft_delete_supplier(id, &self.operator)?;
        tracing::info!(id = %id, "deactivated supplier");

        self.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::catalog::LocalCatalog;
    use std::cell::{Cell, RefCell};
    use supplydesk_store::Database;
    use supplydesk_testing::supplier;
    use supplydesk_types::{ImportanceLevel, StatusFilter, SupplierStatus};

    /// In-memory catalog that counts list calls
    #[derive(Default)]
    struct CountingCatalog {
        rows: RefCell<Vec<Supplier>>,
        lists: Cell<usize>,
    }

    impl SupplierCatalog for CountingCatalog {
        fn list_suppliers(&self) -> Result<Vec<Supplier>> {
            self.lists.set(self.lists.get() + 1);
            Ok(self.rows.borrow().clone())
        }

        fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>> {
            Ok(self.rows.borrow().iter().find(|s| s.id == id).cloned())
        }

        fn create_supplier(&self, draft: &SupplierDraft) -> Result<Supplier> {
            let mut rows = self.rows.borrow_mut();
            let created = Supplier {
                company_name: draft.company_name.clone(),
                status: draft.status,
                updated_by: draft.updated_by.clone(),
                ..Supplier::new(rows.len() as i64 + 1)
            };
            rows.push(created.clone());
            Ok(created)
        }

        fn update_supplier(&self, id: SupplierId, draft: &SupplierDraft) -> Result<Supplier> {
            let mut rows = self.rows.borrow_mut();
            let row = rows
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(supplydesk_store::Error::NotFound(id))?;
            row.company_name = draft.company_name.clone();
            Ok(row.clone())
        }

        fn soft_delete_supplier(&self, id: SupplierId, updated_by: &str) -> Result<()> {
            if let Some(row) = self.rows.borrow_mut().iter_mut().find(|s| s.id == id) {
                row.status = Some(SupplierStatus::Inactive);
                row.updated_by = Some(updated_by.to_string());
            }
            Ok(())
        }
    }

    fn local_desk() -> SupplierDesk<LocalCatalog> {
        let db = Database::open_in_memory().unwrap();
        SupplierDesk::load(LocalCatalog::new(db), "kamal").unwrap()
    }

    #[test]
    fn test_every_write_refetches() {
        let mut desk = SupplierDesk::load(CountingCatalog::default(), "staff").unwrap();
        assert_eq!(desk.catalog().lists.get(), 1);

        let created = desk.create(SupplierDraft::new("Lanka Dairy")).unwrap();
        assert_eq!(desk.catalog().lists.get(), 2);
        assert_eq!(desk.suppliers().len(), 1);

        desk.update(created.id, SupplierDraft::new("Lanka Dairy Ltd"))
            .unwrap();
        assert_eq!(desk.catalog().lists.get(), 3);
        assert_eq!(desk.suppliers()[0].display_name(), "Lanka Dairy Ltd");

        desk.deactivate(created.id).unwrap();
        assert_eq!(desk.catalog().lists.get(), 4);
        assert!(!desk.suppliers()[0].is_active());
    }

    #[test]
    fn test_insert_defers_refetch_and_deactivate_uses_same_operator() {
        let mut desk = SupplierDesk::load(CountingCatalog::default(), "kamal").unwrap();

        let a = desk.insert(SupplierDraft::new("Alpha")).unwrap();
        desk.insert(SupplierDraft {
            updated_by: Some("someone-else".to_string()),
            ..SupplierDraft::new("Bravo")
        })
        .unwrap();
        assert_eq!(desk.catalog().lists.get(), 1);
        assert!(desk.suppliers().is_empty());

        desk.refresh().unwrap();
        assert_eq!(desk.suppliers().len(), 2);
        assert!(
            desk.suppliers()
                .iter()
                .all(|s| s.updated_by.as_deref() == Some("kamal"))
        );

        desk.deactivate(a.id).unwrap();
        assert_eq!(desk.find(a.id).unwrap().updated_by.as_deref(), Some("kamal"));
    }

    #[test]
    fn test_invalid_draft_never_reaches_catalog() {
        let mut desk = SupplierDesk::load(CountingCatalog::default(), "staff").unwrap();

        let err = desk
            .create(SupplierDraft {
                email: Some("nope".to_string()),
                ..SupplierDraft::new("Bad Email Co")
            })
            .unwrap_err();

        assert!(matches!(err, Error::Invalid(_)));
        assert!(desk.catalog().rows.borrow().is_empty());
        assert_eq!(desk.catalog().lists.get(), 1);
    }

    #[test]
    fn test_failed_write_keeps_snapshot() {
        let catalog = CountingCatalog::default();
        catalog
            .rows
            .borrow_mut()
            .push(supplier(1).company("Existing").build());
        let mut desk = SupplierDesk::load(catalog, "staff").unwrap();

        let result = desk.update(SupplierId::new(9), SupplierDraft::new("Ghost"));
        assert!(result.is_err());
        assert_eq!(desk.suppliers().len(), 1);
        assert_eq!(desk.catalog().lists.get(), 1);
    }

    #[test]
    fn test_create_applies_defaults_and_operator() {
        let mut desk = local_desk();

        let created = desk.create(SupplierDraft::new("Green Leaf Farms")).unwrap();

        assert_eq!(created.status, Some(SupplierStatus::Active));
        assert_eq!(created.importance_level, Some(ImportanceLevel::Normal));
        assert_eq!(created.delivery_day, Some(0));
        assert_eq!(created.updated_by.as_deref(), Some("kamal"));
        assert!(
            created
                .supplier_code
                .as_deref()
                .is_some_and(|code| code.starts_with("SUP-") && code.len() == 10)
        );
    }

    #[test]
    fn test_listing_reflects_soft_delete() {
        let mut desk = local_desk();
        let a = desk.create(SupplierDraft::new("Alpha")).unwrap();
        desk.create(SupplierDraft::new("Bravo")).unwrap();

        desk.deactivate(a.id).unwrap();
        desk.deactivate(a.id).unwrap();

        let active = desk.listing(&SupplierQuery::new().with_status(StatusFilter::Active));
        let names: Vec<&str> = active.visible.iter().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["Bravo"]);

        let all = desk.listing(&SupplierQuery::new());
        assert_eq!(all.total_count, 2);
        assert_eq!(desk.analytics().inactive, 1);
    }

    #[test]
    fn test_categories_come_from_snapshot() {
        let mut desk = local_desk();
        desk.create(SupplierDraft {
            category: Some("Dairy, Frozen".to_string()),
            ..SupplierDraft::new("Lanka Dairy")
        })
        .unwrap();
        desk.create(SupplierDraft {
            category: Some("Bakery".to_string()),
            ..SupplierDraft::new("Crumb & Co")
        })
        .unwrap();

        assert_eq!(desk.categories(), vec!["Bakery", "Dairy", "Frozen"]);
    }
}
