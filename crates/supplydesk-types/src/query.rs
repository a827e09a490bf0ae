use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, ImportanceLevel, Result, SupplierStatus};

/// Fixed number of rows per page in the supplier list
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// A record with no status only passes `All`.
    pub fn matches(&self, status: Option<SupplierStatus>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == Some(SupplierStatus::Active),
            StatusFilter::Inactive => status == Some(SupplierStatus::Inactive),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        Ok(match s.parse::<SupplierStatus>()? {
            SupplierStatus::Active => StatusFilter::Active,
            SupplierStatus::Inactive => StatusFilter::Inactive,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportanceFilter {
    #[default]
    All,
    Normal,
    Preferred,
    Critical,
}

impl ImportanceFilter {
    pub fn matches(&self, level: ImportanceLevel) -> bool {
        match self {
            ImportanceFilter::All => true,
            ImportanceFilter::Normal => level == ImportanceLevel::Normal,
            ImportanceFilter::Preferred => level == ImportanceLevel::Preferred,
            ImportanceFilter::Critical => level == ImportanceLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceFilter::All => "All",
            ImportanceFilter::Normal => "Normal",
            ImportanceFilter::Preferred => "Preferred",
            ImportanceFilter::Critical => "Critical",
        }
    }
}

impl fmt::Display for ImportanceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportanceFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ImportanceFilter::All);
        }
        Ok(match s.parse::<ImportanceLevel>()? {
            ImportanceLevel::Normal => ImportanceFilter::Normal,
            ImportanceLevel::Preferred => ImportanceFilter::Preferred,
            ImportanceLevel::Critical => ImportanceFilter::Critical,
        })
    }
}

/// Category filter. `Tag` matches by substring against the raw,
/// comma-separated category string, not by exact tag membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => category.unwrap_or("").contains(tag.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(trimmed.to_string())
        }
    }
}

/// Sort order for the supplier list.
///
/// Deserializes leniently: an unknown key reads back as `name-asc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SortKey {
    /// Company name A-Z
    #[default]
    NameAsc,
    /// Company name Z-A
    NameDesc,
    /// Highest reliability score first
    ReliabilityDesc,
    /// Shortest delivery lead time first
    LeadAsc,
    /// Status, alphabetical
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::ReliabilityDesc,
        SortKey::LeadAsc,
        SortKey::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::ReliabilityDesc => "reliability-desc",
            SortKey::LeadAsc => "lead-asc",
            SortKey::Status => "status",
        }
    }

    /// Parse a sort key; anything unrecognized falls back to `name-asc`.
    pub fn parse_lenient(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        Self::parse_lenient(s)
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

/// User-controlled list parameters.
///
/// Treated as an immutable value: the `with_*` transitions return a new query.
/// Changing any filter resets `page` to 1; changing only the sort keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierQuery {
    pub search: String,
    pub status: StatusFilter,
    pub importance: ImportanceFilter,
    pub category: CategoryFilter,
    pub sort: SortKey,
    /// 1-based page number. Not clamped: an out-of-range page selects nothing.
    pub page: usize,
}

impl Default for SupplierQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            importance: ImportanceFilter::All,
            category: CategoryFilter::All,
            sort: SortKey::NameAsc,
            page: 1,
        }
    }
}

impl SupplierQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    pub fn with_status(self, status: StatusFilter) -> Self {
        Self {
            status,
            page: 1,
            ..self
        }
    }

    pub fn with_importance(self, importance: ImportanceFilter) -> Self {
        Self {
            importance,
            page: 1,
            ..self
        }
    }

    pub fn with_category(self, category: impl Into<CategoryFilter>) -> Self {
        Self {
            category: category.into(),
            page: 1,
            ..self
        }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// True when the search is blank and every filter is `All`
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty()
            && self.status == StatusFilter::All
            && self.importance == ImportanceFilter::All
            && self.category == CategoryFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_change_resets_page() {
        let query = SupplierQuery::new().with_page(4);

        assert_eq!(query.clone().with_search("acme").page, 1);
        assert_eq!(query.clone().with_status(StatusFilter::Active).page, 1);
        assert_eq!(query.clone().with_importance(ImportanceFilter::Critical).page, 1);
        assert_eq!(query.clone().with_category("Dairy").page, 1);
    }

    #[test]
    fn test_sort_change_keeps_page() {
        let query = SupplierQuery::new().with_page(3).with_sort(SortKey::LeadAsc);
        assert_eq!(query.page, 3);
        assert_eq!(query.sort, SortKey::LeadAsc);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_name_asc() {
        assert_eq!(SortKey::parse_lenient("price-desc"), SortKey::NameAsc);
        assert_eq!(SortKey::parse_lenient("lead-asc"), SortKey::LeadAsc);
        assert_eq!(SortKey::from("reliability-desc"), SortKey::ReliabilityDesc);
    }

    #[test]
    fn test_status_filter_never_matches_missing_status() {
        assert!(StatusFilter::All.matches(None));
        assert!(!StatusFilter::Active.matches(None));
        assert!(!StatusFilter::Inactive.matches(None));
        assert!(StatusFilter::Inactive.matches(Some(SupplierStatus::Inactive)));
    }

    #[test]
    fn test_category_filter_is_substring_match() {
        let filter = CategoryFilter::from("Dairy");
        assert!(filter.matches(Some("Dairy, Frozen")));
        assert!(filter.matches(Some("NonDairy")));
        assert!(!filter.matches(Some("Seafood")));
        assert!(!filter.matches(None));
        assert_eq!(CategoryFilter::from(" all "), CategoryFilter::All);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("inactive".parse::<StatusFilter>(), Ok(StatusFilter::Inactive));
        assert_eq!(
            "Preferred".parse::<ImportanceFilter>(),
            Ok(ImportanceFilter::Preferred)
        );
        assert!("Urgent".parse::<ImportanceFilter>().is_err());
    }
}
