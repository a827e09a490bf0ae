use clap::Args;
use supplydesk_types::{ImportanceLevel, SortKey, SupplierDraft, SupplierStatus};

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all columns)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Editable supplier fields shared by `supplier add` and `supplier update`.
///
/// Only flags that are present touch the draft. An empty value clears the field.
#[derive(Debug, Clone, Default, Args)]
pub struct SupplierFieldArgs {
    #[arg(long, help = "Trading name, kept alongside the company name")]
    pub trading_name: Option<String>,

    #[arg(long, help = "Supplier code (generated as SUP-NNNNNN when omitted)")]
    pub code: Option<String>,

    #[arg(long)]
    pub contact_person: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long, help = "Comma-separated categories, e.g. \"Dairy, Frozen\"")]
    pub category: Option<String>,

    #[arg(long, help = "Payment terms, e.g. \"30 days\"")]
    pub payment_terms: Option<String>,

    #[arg(long, help = "Normal, Preferred or Critical")]
    pub importance: Option<ImportanceLevel>,

    #[arg(long, help = "Active or Inactive")]
    pub status: Option<SupplierStatus>,

    #[arg(long, help = "Delivery lead time in days")]
    pub lead_time: Option<u32>,

    #[arg(long)]
    pub total_orders: Option<u32>,

    #[arg(long)]
    pub late_deliveries: Option<u32>,
}

impl SupplierFieldArgs {
    pub fn apply(self, draft: &mut SupplierDraft) {
        set_text(&mut draft.name, self.trading_name);
        set_text(&mut draft.supplier_code, self.code);
        set_text(&mut draft.contact_person, self.contact_person);
        set_text(&mut draft.email, self.email);
        set_text(&mut draft.phone, self.phone);
        set_text(&mut draft.address, self.address);
        set_text(&mut draft.category, self.category);
        set_text(&mut draft.payment_terms, self.payment_terms);

        if self.importance.is_some() {
            draft.importance_level = self.importance;
        }
        if self.status.is_some() {
            draft.status = self.status;
        }
        if self.lead_time.is_some() {
            draft.delivery_day = self.lead_time;
        }
        if self.total_orders.is_some() {
            draft.total_orders = self.total_orders;
        }
        if self.late_deliveries.is_some() {
            draft.late_deliveries = self.late_deliveries;
        }
    }
}

fn set_text(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        *field = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}

/// Strict counterpart of `SortKey::parse_lenient` for command-line input
pub fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::ALL
        .into_iter()
        .find(|key| key.as_str() == s.trim())
        .ok_or_else(|| {
            let known: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown sort key '{}' (expected one of: {})", s, known.join(", "))
        })
}
