//! Supplier fixtures for unit and integration tests.

use supplydesk_types::{ImportanceLevel, Supplier, SupplierStatus};

/// Fluent builder over a sparse `Supplier`.
///
/// ```
/// use supplydesk_testing::supplier;
///
/// let s = supplier(1).company("Lanka Dairy").category("Dairy").lead_time(3).build();
/// assert_eq!(s.display_name(), "Lanka Dairy");
/// ```
#[derive(Debug, Clone)]
pub struct SupplierBuilder {
    inner: Supplier,
}

/// Start an Active supplier with the given id and nothing else set.
pub fn supplier(id: i64) -> SupplierBuilder {
    SupplierBuilder::new(id).status(SupplierStatus::Active)
}

impl SupplierBuilder {
    /// A fully sparse record: only `id` is set.
    pub fn new(id: i64) -> Self {
        Self {
            inner: Supplier::new(id),
        }
    }

    pub fn company(mut self, name: &str) -> Self {
        self.inner.company_name = Some(name.to_string());
        self
    }

    pub fn trading_name(mut self, name: &str) -> Self {
        self.inner.name = Some(name.to_string());
        self
    }

    pub fn code(mut self, code: &str) -> Self {
        self.inner.supplier_code = Some(code.to_string());
        self
    }

    pub fn contact(mut self, person: &str) -> Self {
        self.inner.contact_person = Some(person.to_string());
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.inner.phone = Some(phone.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.inner.category = Some(category.to_string());
        self
    }

    pub fn importance(mut self, level: ImportanceLevel) -> Self {
        self.inner.importance_level = Some(level);
        self
    }

    pub fn status(mut self, status: SupplierStatus) -> Self {
        self.inner.status = Some(status);
        self
    }

    pub fn no_status(mut self) -> Self {
        self.inner.status = None;
        self
    }

    pub fn lead_time(mut self, days: u32) -> Self {
        self.inner.delivery_day = Some(days);
        self
    }

    pub fn reliability(mut self, score: f64) -> Self {
        self.inner.reliability_score = Some(score);
        self
    }

    pub fn on_time_rate(mut self, rate: f64) -> Self {
        self.inner.on_time_rate = Some(rate);
        self
    }

    pub fn build(self) -> Supplier {
        self.inner
    }
}

/// `n` Active suppliers named "Supplier 01", "Supplier 02", ... with ids `1..=n`.
pub fn active_suppliers(n: usize) -> Vec<Supplier> {
    (1..=n as i64)
        .map(|i| supplier(i).company(&format!("Supplier {i:02}")).build())
        .collect()
}

/// A small mixed collection resembling a grocery chain's supplier book.
///
/// | id | company            | status   | importance | category          | lead | score |
/// |----|--------------------|----------|------------|-------------------|------|-------|
/// | 1  | Lanka Dairy        | Active   | Critical   | Dairy, Frozen     | 2    | 9.2   |
/// | 2  | Green Leaf Farms   | Active   | Preferred  | Vegetables, Fruits| 1    | 8.1   |
/// | 3  | Harbor Seafood     | Inactive | Normal     | Seafood           | 4    | 3.5   |
/// | 4  | Crumb & Co Bakery  | Active   | (absent)   | Bakery, Snacks    | 3    | 6.4   |
/// | 5  | Island Beverages   | Active   | Normal     | Beverages         | 7    | 7.7   |
/// | 6  | (absent)           | (absent) | (absent)   | (absent)          | -    | -     |
pub fn grocery_suppliers() -> Vec<Supplier> {
    vec![
        supplier(1)
            .company("Lanka Dairy")
            .code("SUP-100001")
            .contact("Nimal Perera")
            .phone("+94 11 234 5678")
            .category("Dairy, Frozen")
            .importance(ImportanceLevel::Critical)
            .lead_time(2)
            .reliability(9.2)
            .on_time_rate(96.0)
            .build(),
        supplier(2)
            .company("Green Leaf Farms")
            .code("SUP-100002")
            .contact("Ayesha Fernando")
            .category("Vegetables, Fruits")
            .importance(ImportanceLevel::Preferred)
            .lead_time(1)
            .reliability(8.1)
            .on_time_rate(91.0)
            .build(),
        supplier(3)
            .company("Harbor Seafood")
            .code("SUP-100003")
            .category("Seafood")
            .importance(ImportanceLevel::Normal)
            .status(SupplierStatus::Inactive)
            .lead_time(4)
            .reliability(3.5)
            .build(),
        supplier(4)
            .company("Crumb & Co Bakery")
            .code("SUP-100004")
            .trading_name("Crumb")
            .category("Bakery, Snacks")
            .lead_time(3)
            .reliability(6.4)
            .on_time_rate(80.0)
            .build(),
        supplier(5)
            .company("Island Beverages")
            .code("SUP-100005")
            .category("Beverages")
            .importance(ImportanceLevel::Normal)
            .lead_time(7)
            .reliability(7.7)
            .build(),
        SupplierBuilder::new(6).build(),
    ]
}
