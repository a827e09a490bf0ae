use std::path::Path;
use supplydesk_runtime::{ImportReport, InitResult};

use crate::presentation::view_models::{
    CommandResultViewModel, ExportResultViewModel, Guidance, GuidanceViewModel,
    ImportResultViewModel, InitResultViewModel, RejectedRowEntry, StatusBadge,
};

pub fn present_guidance(
    data_dir: &Path,
    initialized: bool,
    supplier_count: usize,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        data_dir: data_dir.display().to_string(),
        initialized,
        supplier_count,
    })
}

pub fn present_init(result: InitResult) -> CommandResultViewModel<InitResultViewModel> {
    let supplier_count = result.supplier_count;
    let content = InitResultViewModel {
        data_dir: result.data_dir.display().to_string(),
        db_path: result.db_path.display().to_string(),
        config_path: result.config_path.display().to_string(),
        config_created: result.config_created,
        supplier_count,
    };

    let view_model =
        CommandResultViewModel::new(content).with_badge(StatusBadge::success("Workspace ready"));

    if supplier_count == 0 {
        view_model.with_suggestions(vec![
            Guidance::new("Add your first supplier")
                .with_command("supplydesk supplier add --company-name <NAME>"),
            Guidance::new("Or import a CSV export").with_command("supplydesk import csv <PATH>"),
        ])
    } else {
        view_model.with_suggestion(
            Guidance::new("Browse suppliers").with_command("supplydesk supplier list"),
        )
    }
}

pub fn present_export(
    output_path: &Path,
    exported_count: usize,
) -> CommandResultViewModel<ExportResultViewModel> {
    CommandResultViewModel::new(ExportResultViewModel {
        output_path: output_path.display().to_string(),
        exported_count,
    })
    .with_badge(StatusBadge::success("Export complete"))
}

pub fn present_import(
    source_path: &Path,
    report: ImportReport,
) -> CommandResultViewModel<ImportResultViewModel> {
    let created = report.created.len();
    let rejected = report.rejected.len();

    let content = ImportResultViewModel {
        source_path: source_path.display().to_string(),
        created: report.created.iter().map(|id| id.get()).collect(),
        rejected: report
            .rejected
            .into_iter()
            .map(|row| RejectedRowEntry {
                line: row.line,
                reason: row.reason,
            })
            .collect(),
        refresh_error: report.refresh_error,
    };

    let badge = if content.refresh_error.is_some() {
        StatusBadge::warning(format!(
            "Imported {} suppliers, but the supplier list could not be reloaded",
            created
        ))
    } else if rejected == 0 {
        StatusBadge::success(format!("Imported {} suppliers", created))
    } else {
        StatusBadge::warning(format!(
            "Imported {} suppliers, skipped {} rows",
            created, rejected
        ))
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if rejected > 0 {
        result = result.with_suggestion(Guidance::new(
            "Fix the listed rows and import only those rows again",
        ));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use supplydesk_runtime::RejectedRow;
    use supplydesk_types::SupplierId;

    #[test]
    fn test_import_with_rejected_rows_is_a_warning() {
        let report = ImportReport {
            created: vec![SupplierId::new(1)],
            rejected: vec![RejectedRow {
                line: 4,
                reason: "invalid lead time: soon".to_string(),
            }],
            refresh_error: None,
        };

        let result = present_import(Path::new("book.csv"), report);

        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Warning);
        assert_eq!(badge.label, "Imported 1 suppliers, skipped 1 rows");
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_import_with_failed_reload_keeps_created_rows() {
        let report = ImportReport {
            created: vec![SupplierId::new(1), SupplierId::new(2)],
            rejected: Vec::new(),
            refresh_error: Some("Query error: connection lost".to_string()),
        };

        let result = present_import(Path::new("book.csv"), report);

        assert_eq!(result.content.created, vec![1, 2]);
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Warning);
        assert!(badge.label.contains("could not be reloaded"));
    }
}
