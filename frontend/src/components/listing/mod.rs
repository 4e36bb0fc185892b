//! Listing UI: cards, tabs, filters, pagination.

pub mod category_tabs;
pub mod filter_dropdown;
pub mod filter_panel;
pub mod header_tabs;
pub mod organisation_card;
pub mod pagination;
pub mod resource_card;
pub mod resource_type_nav;
pub mod results_count;
pub mod search_box;
