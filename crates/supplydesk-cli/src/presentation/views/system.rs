use std::fmt;

use crate::presentation::view_models::{
    ExportResultViewModel, GuidanceViewModel, ImportResultViewModel, InitResultViewModel,
};

// --------------------------------------------------------
// Guidance (no subcommand)
// --------------------------------------------------------

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "supplydesk - supplier records console")?;
        writeln!(f)?;

        if !self.data.initialized {
            writeln!(f, "Get started:")?;
            writeln!(f, "  supplydesk init")?;
            writeln!(f)?;
            writeln!(f, "Data directory: {}", self.data.data_dir)?;
        } else if self.data.supplier_count > 0 {
            writeln!(f, "Quick commands:")?;
            writeln!(f, "  supplydesk supplier list                # First page of suppliers")?;
            writeln!(f, "  supplydesk supplier list --search milk  # Search names, codes, phones")?;
            writeln!(f, "  supplydesk supplier show <ID>           # Every field of one supplier")?;
            writeln!(f, "  supplydesk analytics                    # Summary figures")?;
        } else {
            writeln!(f, "No suppliers recorded yet.")?;
            writeln!(f)?;
            writeln!(f, "Next steps:")?;
            writeln!(f, "  supplydesk supplier add --company-name \"Lanka Dairy\"")?;
            writeln!(f, "  supplydesk import csv suppliers.csv")?;
        }

        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  supplydesk --help")
    }
}

// --------------------------------------------------------
// Init
// --------------------------------------------------------

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f, "Database:       {}", self.data.db_path)?;
        writeln!(
            f,
            "Config:         {}{}",
            self.data.config_path,
            if self.data.config_created {
                " (created)"
            } else {
                ""
            }
        )?;
        writeln!(f, "Suppliers:      {}", self.data.supplier_count)
    }
}

// --------------------------------------------------------
// Export / Import
// --------------------------------------------------------

pub struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
}

impl<'a> ExportResultView<'a> {
    pub fn new(data: &'a ExportResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Exported {} suppliers to {}",
            self.data.exported_count, self.data.output_path
        )
    }
}

pub struct ImportResultView<'a> {
    data: &'a ImportResultViewModel,
}

impl<'a> ImportResultView<'a> {
    pub fn new(data: &'a ImportResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ImportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Created {} suppliers from {}",
            self.data.created.len(),
            self.data.source_path
        )?;

        if !self.data.rejected.is_empty() {
            writeln!(f)?;
            writeln!(f, "{:<6} REASON", "LINE")?;
            writeln!(f, "{}", "-".repeat(60))?;
            for row in &self.data.rejected {
                writeln!(f, "{:<6} {}", row.line, row.reason)?;
            }
        }

        if let Some(err) = &self.data.refresh_error {
            writeln!(f)?;
            writeln!(f, "Saved, but reloading the supplier list failed: {}", err)?;
        }

        Ok(())
    }
}
