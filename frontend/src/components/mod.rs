use dioxus::prelude::*;

pub mod data_stories_section;
pub mod error_boundary;
pub mod exclusion_section;
pub mod faq_accordion;
pub mod get_involved;
pub mod hero;
pub mod listing;
pub mod loading;
pub mod newsletter_section;
pub mod posts_section;
pub mod site_layout;
pub mod stats_section;

/// Shown wherever a record has no featured image.
pub(crate) const FALLBACK_IMAGE: Asset = asset!("/assets/images/fallback.png");
