use serde::{Deserialize, Serialize};
use supplydesk_types::{Error, Result, Supplier, SupplierDraft};

/// Column order of the supplier CSV
pub const CSV_HEADERS: [&str; 11] = [
    "SupplierCode",
    "Name",
    "CompanyName",
    "ContactPerson",
    "Email",
    "Phone",
    "Category",
    "PaymentTerms",
    "Priority",
    "Status",
    "LeadTime",
];

/// One CSV row. Every cell is text; absent values are empty cells and
/// missing columns read back as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CsvRecord {
    pub supplier_code: String,
    pub name: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub payment_terms: String,
    pub priority: String,
    pub status: String,
    pub lead_time: String,
}

impl From<&Supplier> for CsvRecord {
    fn from(s: &Supplier) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            supplier_code: text(&s.supplier_code),
            name: text(&s.name),
            company_name: text(&s.company_name),
            contact_person: text(&s.contact_person),
            email: text(&s.email),
            phone: text(&s.phone),
            category: text(&s.category),
            payment_terms: text(&s.payment_terms),
            priority: s.importance_level.map(|l| l.to_string()).unwrap_or_default(),
            status: s.status.map(|st| st.to_string()).unwrap_or_default(),
            lead_time: s.delivery_day.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

impl CsvRecord {
    /// Convert an imported row into a create payload. Blank cells stay absent;
    /// unparseable enum or number cells are rejected.
    pub fn into_draft(self) -> Result<SupplierDraft> {
        let lead_time = match cell(self.lead_time) {
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| Error::InvalidValue {
                kind: "lead time",
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(SupplierDraft {
            supplier_code: cell(self.supplier_code),
            company_name: cell(self.company_name),
            name: cell(self.name),
            contact_person: cell(self.contact_person),
            email: cell(self.email),
            phone: cell(self.phone),
            category: cell(self.category),
            payment_terms: cell(self.payment_terms),
            importance_level: cell(self.priority).map(|p| p.parse()).transpose()?,
            status: cell(self.status).map(|s| s.parse()).transpose()?,
            delivery_day: lead_time,
            ..Default::default()
        })
    }
}

fn cell(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
