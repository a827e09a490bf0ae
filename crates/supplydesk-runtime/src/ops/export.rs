use std::io::Write;
use supplydesk_engine::{CSV_HEADERS, CsvRecord};
use supplydesk_types::Supplier;

use crate::Result;

/// Write `suppliers` as CSV and return the number of data rows.
///
/// The header row is always written, even for an empty book.
pub fn export_csv<W: Write>(suppliers: &[Supplier], writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for supplier in suppliers {
        csv_writer.serialize(CsvRecord::from(supplier))?;
    }
    csv_writer.flush()?;

    tracing::debug!(rows = suppliers.len(), "exported suppliers to CSV");
    Ok(suppliers.len())
}
