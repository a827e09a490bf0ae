use serde::Serialize;
use supplydesk_types::{ImportanceLevel, Supplier, SupplierId, SupplierStatus};

/// How many suppliers the top and bottom reliability rankings hold
pub const RANKING_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilityEntry {
    pub id: SupplierId,
    pub label: String,
    /// Reliability score rounded to two decimals
    pub score: f64,
    /// Score scaled to a percentage, one decimal
    pub percent: f64,
}

/// Dashboard figures over the whole supplier collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierAnalytics {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub by_importance: Vec<LabelCount>,
    pub by_category: Vec<LabelCount>,
    pub avg_delivery_days: f64,
    pub avg_on_time_rate: f64,
    pub top: Vec<ReliabilityEntry>,
    pub bottom: Vec<ReliabilityEntry>,
}

pub fn summarize(records: &[Supplier]) -> SupplierAnalytics {
    let active: Vec<&Supplier> = records.iter().filter(|s| s.is_active()).collect();
    let inactive = records
        .iter()
        .filter(|s| s.status == Some(SupplierStatus::Inactive))
        .count();

    let by_importance = ImportanceLevel::ALL
        .iter()
        .map(|level| LabelCount {
            label: level.to_string(),
            value: records.iter().filter(|s| s.importance() == *level).count(),
        })
        .filter(|entry| entry.value > 0)
        .collect();

    let avg_delivery_days = mean_of_positive(active.iter().map(|s| f64::from(s.delivery_days())));
    let avg_on_time_rate = mean_of_positive(active.iter().map(|s| s.on_time()));

    let mut ranked = active.clone();
    ranked.sort_by(|a, b| b.reliability().total_cmp(&a.reliability()));

    let top = ranked
        .iter()
        .take(RANKING_SIZE)
        .map(|s| ranking_entry(s))
        .collect();
    let bottom = ranked
        .iter()
        .rev()
        .take(RANKING_SIZE)
        .map(|s| ranking_entry(s))
        .collect();

    SupplierAnalytics {
        total: records.len(),
        active: active.len(),
        inactive,
        by_importance,
        by_category: category_counts(records),
        avg_delivery_days,
        avg_on_time_rate,
        top,
        bottom,
    }
}

/// Tag counts, highest first. Ties keep first-appearance order.
fn category_counts(records: &[Supplier]) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    for tag in records.iter().flat_map(|s| s.category_tags()) {
        match counts.iter_mut().find(|entry| entry.label == tag) {
            Some(entry) => entry.value += 1,
            None => counts.push(LabelCount {
                label: tag.to_string(),
                value: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.value.cmp(&a.value));
    counts
}

fn ranking_entry(supplier: &Supplier) -> ReliabilityEntry {
    let score = supplier.reliability();
    ReliabilityEntry {
        id: supplier.id,
        label: supplier.display_name().to_string(),
        score: round_to(score, 2),
        percent: round_to(score * 10.0, 1),
    }
}

fn mean_of_positive(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .filter(|v| *v > 0.0)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        round_to(sum / count as f64, 1)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
