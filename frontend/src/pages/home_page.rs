use dioxus::prelude::*;

use common::site_const::{HOME_POSTS_COUNT, REPORTS_CATEGORY_ID};

use crate::api::posts_api::{fetch_latest_posts, fetch_posts_in_category};
use crate::components::data_stories_section::DataStoriesSection;
use crate::components::exclusion_section::ExclusionSection;
use crate::components::get_involved::GetInvolvedSection;
use crate::components::hero::HomeHero;
use crate::components::newsletter_section::NewsletterSection;
use crate::components::posts_section::PostsSection;
use crate::components::stats_section::StatsSection;

/// Home page
#[component]
pub fn HomePage() -> Element {
    let posts = use_resource(|| fetch_latest_posts(HOME_POSTS_COUNT));
    let reports = use_resource(|| fetch_posts_in_category(REPORTS_CATEGORY_ID, HOME_POSTS_COUNT));

    rsx! {
        Title { "Inclusion For All - Promoting Financial Inclusion in Nigeria" }
        document::Meta {
            name: "description",
            content: "Inclusion For All advocates for policies that promote financial inclusion for marginalised populations in Nigeria",
        }

        HomeHero {}
        PostsSection { posts }
        ExclusionSection {}
        StatsSection {}
        DataStoriesSection { reports }
        GetInvolvedSection {}
        NewsletterSection {}
    }
}
