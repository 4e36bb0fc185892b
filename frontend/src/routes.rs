use dioxus::prelude::*;

use crate::components::site_layout::SiteLayout;
use crate::data_definitions::url_param::UrlParam;
use crate::data_definitions::view_state::{ExplorerView, ResourcesView};

use crate::pages::about_page::AboutPage;
use crate::pages::blog_post_page::BlogPostPage;
use crate::pages::data_explorer_page::DataExplorerPage;
use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::resources_page::ResourcesPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]


    #[route("/")]
    HomePage {},


    #[route("/about")]
    AboutPage {},


    #[route("/resources/:view/:page")]
    ResourcesPage {
        view: UrlParam<ResourcesView>,
        page: u64,
    },


    #[route("/data-explorer/:view/:page")]
    DataExplorerPage {
        view: UrlParam<ExplorerView>,
        page: u64,
    },


    #[route("/blog/:slug")]
    BlogPostPage { slug: String },


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn resources(view: ResourcesView, page: u64) -> Self {
        Self::ResourcesPage {
            view: UrlParam::from(view),
            page,
        }
    }

    pub fn resources_default() -> Self {
        Self::resources(ResourcesView::default(), 1)
    }

    pub fn data_explorer(view: ExplorerView, page: u64) -> Self {
        Self::DataExplorerPage {
            view: UrlParam::from(view),
            page,
        }
    }

    pub fn data_explorer_default() -> Self {
        Self::data_explorer(ExplorerView::default(), 1)
    }
}
