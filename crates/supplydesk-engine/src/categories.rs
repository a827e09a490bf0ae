use supplydesk_types::Supplier;

use crate::collate::locale_cmp;

/// Every distinct category tag seen across `records`, sorted for display.
///
/// This is the domain of the category filter besides `All`.
pub fn observed_categories(records: &[Supplier]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in records.iter().flat_map(|s| s.category_tags()) {
        if !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags.sort_by(|a, b| locale_cmp(a, b));
    tags
}
