use serde::Serialize;
use supplydesk_types::PAGE_SIZE;

use crate::listing::SupplierListing;

/// One entry in the pager strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Gap,
}

/// Page buttons for a pager: the first page, the last page, and every page
/// within one of `current`. Non-adjacent neighbours are separated by `Gap`.
pub fn page_links(current: usize, page_count: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    let mut previous: Option<usize> = None;

    for number in 1..=page_count {
        let near_current = number.abs_diff(current) <= 1;
        if number != 1 && number != page_count && !near_current {
            continue;
        }
        if let Some(prev) = previous
            && number - prev > 1
        {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page {
            number,
            current: number == current,
        });
        previous = Some(number);
    }

    links
}

impl SupplierListing<'_> {
    /// 1-based inclusive bounds of the visible rows, `None` when nothing shows
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.visible.is_empty() {
            return None;
        }
        let first = (self.page - 1) * PAGE_SIZE + 1;
        Some((first, first + self.visible.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        page_links(self.page, self.page_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;
    use supplydesk_types::{Supplier, SupplierQuery};

    fn numbers(links: &[PageLink]) -> Vec<Option<usize>> {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Gap => None,
            })
            .collect()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(
            page_links(1, 1),
            vec![PageLink::Page {
                number: 1,
                current: true
            }]
        );
    }

    #[test]
    fn test_gaps_around_middle_page() {
        let links = page_links(5, 9);
        assert_eq!(
            numbers(&links),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(9)]
        );
        assert!(links.contains(&PageLink::Page {
            number: 5,
            current: true
        }));
    }

    #[test]
    fn test_no_gap_between_adjacent_pages() {
        assert_eq!(
            numbers(&page_links(2, 4)),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
        assert_eq!(numbers(&page_links(1, 5)), vec![Some(1), Some(2), None, Some(5)]);
    }

    #[test]
    fn test_out_of_range_page_still_lists_ends() {
        assert_eq!(numbers(&page_links(0, 3)), vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn test_listing_range() {
        let records: Vec<Supplier> = (1..=12i64).map(Supplier::new).collect();

        let first = compute(&records, &SupplierQuery::new());
        assert_eq!(first.range(), Some((1, 10)));
        assert!(!first.has_previous());
        assert!(first.has_next());

        let second = compute(&records, &SupplierQuery::new().with_page(2));
        assert_eq!(second.range(), Some((11, 12)));
        assert!(second.has_previous());
        assert!(!second.has_next());

        let beyond = compute(&records, &SupplierQuery::new().with_page(3));
        assert_eq!(beyond.range(), None);
    }
}
