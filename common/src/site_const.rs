//! Site-wide constants.

/// Number of records requested per listing page.
pub const PAGE_SIZE: u64 = 6;

/// Posts shown in the home page "Latest Insights" strip.
pub const HOME_POSTS_COUNT: u64 = 3;

/// Related posts shown under a blog post.
pub const RELATED_POSTS_COUNT: u64 = 3;

/// Content-source category holding data-story reports.
pub const REPORTS_CATEGORY_ID: u64 = 36;

/// Fallback category for ecosystem organisations when the content source
/// has no `organisation` post type.
pub const ORGANISATIONS_CATEGORY_ID: u64 = 35;

/// Fallback category for ecosystem policies when the content source has
/// no `policy` post type.
pub const POLICIES_CATEGORY_ID: u64 = 37;

/// Words per minute assumed by the read-time estimate.
pub const READ_TIME_WPM: u64 = 200;
