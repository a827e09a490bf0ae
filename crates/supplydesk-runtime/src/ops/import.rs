use csv::StringRecord;
use serde::Serialize;
use std::io::Read;
use supplydesk_engine::CsvRecord;
use supplydesk_types::SupplierId;

use crate::Result;
use crate::catalog::SupplierCatalog;
use crate::desk::SupplierDesk;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    /// 1-based line in the source file where the record starts; the header
    /// is line 1.
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub created: Vec<SupplierId>,
    pub rejected: Vec<RejectedRow>,
    /// Set when rows were saved but the supplier list could not be re-fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_error: Option<String>,
}

/// Create one supplier per CSV row through the desk, then re-fetch once.
///
/// Rows that fail to parse or validate are reported and skipped; the rest
/// are still imported. An unreadable header aborts the whole import.
pub fn import_csv<C, R>(desk: &mut SupplierDesk<C>, reader: R) -> Result<ImportReport>
where
    C: SupplierCatalog,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut report = ImportReport::default();
    let mut record = StringRecord::new();
    loop {
        let (line, outcome) = match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Ok(true) => {
                let line = start_line(record.position(), csv_reader.position());
                let outcome = record
                    .deserialize::<CsvRecord>(Some(&headers))
                    .map_err(crate::Error::from)
                    .and_then(|row| row.into_draft().map_err(crate::Error::from))
                    .and_then(|draft| desk.insert(draft));
                (line, outcome)
            }
            Err(err) => (
                start_line(err.position(), csv_reader.position()),
                Err(err.into()),
            ),
        };

        match outcome {
            Ok(created) => report.created.push(created.id),
            Err(err) => {
                tracing::warn!(line, error = %err, "skipped CSV row");
                report.rejected.push(RejectedRow {
                    line,
                    reason: err.to_string(),
                });
            }
        }
    }

    if let Err(err) = desk.refresh() {
        tracing::warn!(error = %err, "imported rows saved but re-fetch failed");
        report.refresh_error = Some(err.to_string());
    }

    tracing::info!(
        created = report.created.len(),
        rejected = report.rejected.len(),
        "imported suppliers from CSV"
    );
    Ok(report)
}

fn start_line(record: Option<&csv::Position>, reader: &csv::Position) -> u64 {
    record.map_or_else(|| reader.line(), |p| p.line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocalCatalog;
    use supplydesk_store::Database;
    use std::cell::Cell;
    use supplydesk_types::{ImportanceLevel, Supplier, SupplierDraft, SupplierStatus};

    fn desk() -> SupplierDesk<LocalCatalog> {
        let db = Database::open_in_memory().unwrap();
        SupplierDesk::load(LocalCatalog::new(db), "importer").unwrap()
    }

    /// SQLite catalog that counts list calls and can fail them on demand
    struct CountingCatalog {
        inner: LocalCatalog,
        lists: Cell<usize>,
        fail_lists_after: Option<usize>,
    }

    impl CountingCatalog {
        fn new(fail_lists_after: Option<usize>) -> Self {
            Self {
                inner: LocalCatalog::new(Database::open_in_memory().unwrap()),
                lists: Cell::new(0),
                fail_lists_after,
            }
        }
    }

    impl SupplierCatalog for CountingCatalog {
        fn list_suppliers(&self) -> Result<Vec<Supplier>> {
            self.lists.set(self.lists.get() + 1);
            if self.fail_lists_after.is_some_and(|n| self.lists.get() > n) {
                let lost = supplydesk_store::Error::Query("connection lost".to_string());
                return Err(lost.into());
            }
            self.inner.list_suppliers()
        }

        fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>> {
            self.inner.get_supplier(id)
        }

        fn create_supplier(&self, draft: &SupplierDraft) -> Result<Supplier> {
            self.inner.create_supplier(draft)
        }

        fn update_supplier(&self, id: SupplierId, draft: &SupplierDraft) -> Result<Supplier> {
            self.inner.update_supplier(id, draft)
        }

        fn soft_delete_supplier(&self, id: SupplierId, updated_by: &str) -> Result<()> {
            self.inner.soft_delete_supplier(id, updated_by)
        }
    }

    #[test]
    fn test_imports_valid_rows_and_reports_the_rest() {
        let mut desk = desk();
        let csv = "\
CompanyName,Category,Priority,Status,LeadTime,Email
Lanka Dairy,\"Dairy, Frozen\",Critical,Active,2,orders@lanka.example
,Seafood,,,,
Green Leaf,Vegetables,Urgent,,,
Island Beverages,Beverages,,Inactive,soon,
Harbor Seafood,Seafood,Normal,,4,
";

        let report = import_csv(&mut desk, csv.as_bytes()).unwrap();

        assert_eq!(report.created.len(), 2);
        let lines: Vec<u64> = report.rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(report.rejected[0].reason.contains("Company Name is required"));
        assert!(report.rejected[1].reason.contains("importance level"));
        assert!(report.rejected[2].reason.contains("lead time"));

        let lanka = desk.find(report.created[0]).unwrap();
        assert_eq!(lanka.importance_level, Some(ImportanceLevel::Critical));
        assert_eq!(lanka.delivery_day, Some(2));
        assert_eq!(lanka.category.as_deref(), Some("Dairy, Frozen"));

        let harbor = desk.find(report.created[1]).unwrap();
        assert_eq!(harbor.status, Some(SupplierStatus::Active));
        assert_eq!(harbor.updated_by.as_deref(), Some("importer"));
    }

    #[test]
    fn test_rejected_line_counts_multiline_cells() {
        let mut desk = desk();
        let csv = "\
CompanyName,ContactPerson,LeadTime
Lanka Dairy,\"Nimal Perera
Orders desk\",2
Green Leaf,Kandy,soon
Harbor Seafood,,4
";

        let report = import_csv(&mut desk, csv.as_bytes()).unwrap();

        assert_eq!(report.created.len(), 2);
        let lines: Vec<u64> = report.rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![4]);

        let lanka = desk.find(report.created[0]).unwrap();
        assert_eq!(
            lanka.contact_person.as_deref(),
            Some("Nimal Perera\nOrders desk")
        );
    }

    #[test]
    fn test_import_refetches_once() {
        let mut desk = SupplierDesk::load(CountingCatalog::new(None), "importer").unwrap();
        let csv = "CompanyName\nAlpha\nBravo\nCharlie\n";

        let report = import_csv(&mut desk, csv.as_bytes()).unwrap();

        assert_eq!(report.created.len(), 3);
        assert_eq!(report.refresh_error, None);
        assert_eq!(desk.catalog().lists.get(), 2);
        assert_eq!(desk.suppliers().len(), 3);
    }

    #[test]
    fn test_failed_refetch_keeps_saved_rows_as_created() {
        let mut desk = SupplierDesk::load(CountingCatalog::new(Some(1)), "importer").unwrap();
        let csv = "CompanyName\nAlpha\nBravo\n";

        let report = import_csv(&mut desk, csv.as_bytes()).unwrap();

        assert_eq!(report.created.len(), 2);
        assert!(report.rejected.is_empty());
        assert!(
            report
                .refresh_error
                .as_deref()
                .is_some_and(|msg| msg.contains("connection lost"))
        );
        assert_eq!(desk.catalog().inner.list_suppliers().unwrap().len(), 2);
    }

    #[test]
    fn test_export_then_import_reproduces_the_book() {
        let mut source = desk();
        source
            .create(supplydesk_types::SupplierDraft {
                supplier_code: Some("SUP-424242".to_string()),
                category: Some("Bakery, Snacks".to_string()),
                phone: Some("+94 77 123 4567".to_string()),
                ..supplydesk_types::SupplierDraft::new("Crumb & Co")
            })
            .unwrap();

        let mut buffer = Vec::new();
        crate::export_csv(source.suppliers(), &mut buffer).unwrap();

        let mut target = desk();
        let report = import_csv(&mut target, buffer.as_slice()).unwrap();

        assert!(report.rejected.is_empty());
        let copy = &target.suppliers()[0];
        assert_eq!(copy.supplier_code.as_deref(), Some("SUP-424242"));
        assert_eq!(copy.category.as_deref(), Some("Bakery, Snacks"));
        assert_eq!(copy.phone.as_deref(), Some("+94 77 123 4567"));
    }

    #[test]
    fn test_header_only_file_imports_nothing() {
        let mut desk = desk();
        let report = import_csv(&mut desk, "CompanyName,Status\n".as_bytes()).unwrap();

        assert_eq!(report, ImportReport::default());
    }
}
