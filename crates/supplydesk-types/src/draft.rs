use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, FieldError, ImportanceLevel, Result, Supplier, SupplierStatus};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid email regex"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s+\-()]{7,20}$").expect("valid phone regex"));

/// Operator recorded in `updated_by` when the caller does not name one
pub const DEFAULT_OPERATOR: &str = "staff";

/// Create/update payload sent to the catalog.
///
/// Updates are full replacements: every field of the stored record is
/// overwritten by the draft, so edit flows start from `SupplierDraft::from(&supplier)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub supplier_code: Option<String>,
    pub company_name: Option<String>,
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub payment_terms: Option<String>,
    pub importance_level: Option<ImportanceLevel>,
    pub status: Option<SupplierStatus>,
    pub delivery_day: Option<u32>,
    pub total_orders: Option<u32>,
    pub late_deliveries: Option<u32>,
    pub updated_by: Option<String>,
}

impl SupplierDraft {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
            ..Default::default()
        }
    }

    /// Check the payload, reporting every rejected field at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if non_blank(&self.company_name).is_none() {
            errors.push(FieldError::new("company_name", "Company Name is required"));
        }

        if let Some(email) = non_blank(&self.email)
            && !EMAIL_PATTERN.is_match(email)
        {
            errors.push(FieldError::new("email", "Invalid email format"));
        }

        if let Some(phone) = non_blank(&self.phone)
            && !PHONE_PATTERN.is_match(phone)
        {
            errors.push(FieldError::new("phone", "Phone must be 7-20 digits"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Fill creation defaults: generated code, Normal importance, Active
    /// status, zeroed metrics and the default operator.
    pub fn with_defaults(mut self, now: DateTime<Utc>) -> Self {
        if non_blank(&self.supplier_code).is_none() {
            self.supplier_code = Some(generate_supplier_code(now));
        }
        self.importance_level.get_or_insert(ImportanceLevel::Normal);
        self.status.get_or_insert(SupplierStatus::Active);
        self.delivery_day.get_or_insert(0);
        self.total_orders.get_or_insert(0);
        self.late_deliveries.get_or_insert(0);
        if non_blank(&self.updated_by).is_none() {
            self.updated_by = Some(DEFAULT_OPERATOR.to_string());
        }
        self
    }
}

impl From<&Supplier> for SupplierDraft {
    fn from(supplier: &Supplier) -> Self {
        Self {
            supplier_code: supplier.supplier_code.clone(),
            company_name: supplier.company_name.clone(),
            name: supplier.name.clone(),
            contact_person: supplier.contact_person.clone(),
            email: supplier.email.clone(),
            phone: supplier.phone.clone(),
            address: supplier.address.clone(),
            category: supplier.category.clone(),
            payment_terms: supplier.payment_terms.clone(),
            importance_level: supplier.importance_level,
            status: supplier.status,
            delivery_day: supplier.delivery_day,
            total_orders: supplier.total_orders,
            late_deliveries: supplier.late_deliveries,
            updated_by: supplier.updated_by.clone(),
        }
    }
}

/// `SUP-` followed by the last six digits of the millisecond timestamp
pub fn generate_supplier_code(now: DateTime<Utc>) -> String {
    format!("SUP-{:06}", now.timestamp_millis().rem_euclid(1_000_000))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
