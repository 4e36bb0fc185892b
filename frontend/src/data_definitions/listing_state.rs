//! Rendering-side view of one listing fetch cycle.

use dioxus::prelude::*;

use common::content_item::ListingPage;

/// What the listing grid should show right now. A stale response that a
/// newer request already superseded stays in `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingFetchState {
    Loading,
    Loaded(ListingPage),
    Failed(String),
}

impl ListingFetchState {
    /// Collapse a guarded `use_resource` value: `None` while the fetch
    /// runs, `Some(None)` for a discarded stale response.
    pub fn from_resource(
        value: Option<&Option<Result<ListingPage, ServerFnError>>>,
    ) -> Self {
        match value {
            Some(Some(Ok(page))) => ListingFetchState::Loaded(page.clone()),
            Some(Some(Err(err))) => ListingFetchState::Failed(err.to_string()),
            Some(None) | None => ListingFetchState::Loading,
        }
    }

    /// The page to render. A failed fetch renders as an empty result
    /// set with zero totals; the error text is surfaced separately.
    pub fn page(&self) -> ListingPage {
        match self {
            ListingFetchState::Loaded(page) => page.clone(),
            _ => ListingPage::empty(),
        }
    }

    pub fn error(&self) -> Option<String> {
        match self {
            ListingFetchState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListingFetchState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::content_item::ContentItem;

    fn loaded_page() -> ListingPage {
        ListingPage {
            items: vec![ContentItem { id: 1, ..Default::default() }],
            total_items: 1,
            total_pages: 1,
            page_number: 1,
        }
    }

    #[test]
    fn in_flight_is_loading() {
        assert!(ListingFetchState::from_resource(None).is_loading());
    }

    #[test]
    fn stale_discard_is_loading() {
        assert!(ListingFetchState::from_resource(Some(&None)).is_loading());
    }

    #[test]
    fn failure_resets_to_empty_page() {
        let err = ServerFnError::ServerError {
            message: "content source returned 503 for posts".to_string(),
            code: 500,
            details: None,
        };
        let state = ListingFetchState::from_resource(Some(&Some(Err(err))));

        assert_eq!(state.page(), ListingPage::empty());
        assert_eq!(state.page().total_pages, 0);
        assert!(state.error().unwrap().contains("503"));
    }

    #[test]
    fn success_exposes_the_page() {
        let state = ListingFetchState::from_resource(Some(&Some(Ok(loaded_page()))));
        assert_eq!(state.page().total_items, 1);
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }
}
