use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Category tags offered as suggestions when editing a supplier.
/// The `category` field itself is free text; nothing enforces this list.
pub const CATEGORY_SUGGESTIONS: &[&str] = &[
    "Dairy",
    "Vegetables",
    "Fruits",
    "Frozen",
    "Snacks",
    "Beverages",
    "Bakery",
    "Meat",
    "Seafood",
    "Condiments",
];

/// Store-assigned supplier identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(i64);

impl SupplierId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SupplierId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for SupplierId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::InvalidValue {
                kind: "supplier id",
                value: s.to_string(),
            })
    }
}

/// Lifecycle status. Deleting a supplier moves it to `Inactive`; records are
/// never physically removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierStatus {
    Active,
    Inactive,
}

impl SupplierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(SupplierStatus::Active),
            "inactive" => Ok(SupplierStatus::Inactive),
            _ => Err(Error::InvalidValue {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportanceLevel {
    #[default]
    Normal,
    Preferred,
    Critical,
}

impl ImportanceLevel {
    pub const ALL: [ImportanceLevel; 3] = [
        ImportanceLevel::Normal,
        ImportanceLevel::Preferred,
        ImportanceLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceLevel::Normal => "Normal",
            ImportanceLevel::Preferred => "Preferred",
            ImportanceLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for ImportanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportanceLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(ImportanceLevel::Normal),
            "preferred" => Ok(ImportanceLevel::Preferred),
            "critical" => Ok(ImportanceLevel::Critical),
            _ => Err(Error::InvalidValue {
                kind: "importance level",
                value: s.to_string(),
            }),
        }
    }
}

/// Supplier record as owned by the catalog.
///
/// Every attribute except `id` may be absent. Readers must go through the
/// defaulting accessors (`importance()`, `delivery_days()`, ...) or treat a
/// missing string as empty; a sparse record is always valid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,

    #[serde(default)]
    pub supplier_code: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,

    /// Comma-separated free-text tags, e.g. "Dairy, Frozen"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub importance_level: Option<ImportanceLevel>,
    #[serde(default)]
    pub status: Option<SupplierStatus>,

    /// Lead time in days
    #[serde(default)]
    pub delivery_day: Option<u32>,
    #[serde(default)]
    pub total_orders: Option<u32>,
    #[serde(default)]
    pub late_deliveries: Option<u32>,
    /// Percentage of deliveries that arrived on time
    #[serde(default)]
    pub on_time_rate: Option<f64>,
    /// 0-10 score written by an external scoring job
    #[serde(default)]
    pub reliability_score: Option<f64>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

impl Supplier {
    pub fn new(id: impl Into<SupplierId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Importance level, `Normal` when absent
    pub fn importance(&self) -> ImportanceLevel {
        self.importance_level.unwrap_or_default()
    }

    pub fn delivery_days(&self) -> u32 {
        self.delivery_day.unwrap_or(0)
    }

    pub fn orders(&self) -> u32 {
        self.total_orders.unwrap_or(0)
    }

    pub fn late(&self) -> u32 {
        self.late_deliveries.unwrap_or(0)
    }

    pub fn on_time(&self) -> f64 {
        self.on_time_rate.unwrap_or(0.0)
    }

    pub fn reliability(&self) -> f64 {
        self.reliability_score.unwrap_or(0.0)
    }

    pub fn is_active(&self) -> bool {
        self.status == Some(SupplierStatus::Active)
    }

    /// Company name, or "" when absent
    pub fn display_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or("")
    }

    /// Trimmed, non-empty category tags in declaration order
    pub fn category_tags(&self) -> impl Iterator<Item = &str> {
        self.category
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}
