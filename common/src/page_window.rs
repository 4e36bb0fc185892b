//! Compact page-number window for pagination controls.

/// One slot in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageWindowItem {
    Page(u64),
    Ellipsis,
}

/// Collapse the full page range into first two + last two + current page
/// and neighbors, with a single ellipsis per gap. Returns nothing when
/// there is at most one page, in which case no controls render at all.
pub fn compute_page_window(current_page: u64, total_pages: u64) -> Vec<PageWindowItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut window = Vec::new();
    for i in 1..=total_pages {
        let near_current = i + 1 >= current_page && i <= current_page + 1;
        if i <= 2 || i + 2 > total_pages || near_current {
            window.push(PageWindowItem::Page(i));
        } else if (i == 3 && current_page > 4)
            || (i + 2 == total_pages && current_page + 3 < total_pages)
        {
            window.push(PageWindowItem::Ellipsis);
        }
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageWindowItem::{Ellipsis, Page};

    #[test]
    fn single_page_renders_nothing() {
        assert!(compute_page_window(1, 0).is_empty());
        assert!(compute_page_window(1, 1).is_empty());
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            compute_page_window(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            compute_page_window(5, 10),
            vec![
                Page(1),
                Page(2),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn small_range_has_no_ellipsis() {
        assert_eq!(
            compute_page_window(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            compute_page_window(10, 10),
            vec![Page(1), Page(2), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn near_front_gap_only_on_the_right() {
        // current page 4: pages 3..=5 are neighbors, so the only gap is
        // between 5 and 9
        assert_eq!(
            compute_page_window(4, 10),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn two_pages() {
        assert_eq!(compute_page_window(1, 2), vec![Page(1), Page(2)]);
    }
}
