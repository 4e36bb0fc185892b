//! Data explorer: the pure filtered-listing pipeline consumer.

use dioxus::prelude::*;

use crate::api::listing_api::fetch_listing_page;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::hero::PageHero;
use crate::components::listing::filter_panel::FilterPanel;
use crate::components::listing::pagination::PaginationControls;
use crate::components::listing::resource_card::ResourceCard;
use crate::components::listing::results_count::ResultsCount;
use crate::components::listing::search_box::SearchBox;
use crate::components::loading::LoadingCards;
use crate::components::newsletter_section::NewsletterSection;
use crate::data_definitions::listing_state::ListingFetchState;
use crate::data_definitions::request_guard::RequestGuard;
use crate::data_definitions::url_param::UrlParam;
use crate::data_definitions::view_state::{CONTENT_TYPE_TABS, ExplorerView};
use crate::routes::Route;

#[component]
pub fn DataExplorerPage(view: UrlParam<ExplorerView>, page: u64) -> Element {
    rsx! {
        Title { "Data Explorer - Inclusion For All" }
        document::Meta {
            name: "description",
            content: "Explore our comprehensive data and insights on financial inclusion in Nigeria through interactive visualizations and analysis.",
        }

        PageHero {
            title: "Data Explorer",
            body_text: "Explore our comprehensive data and insights on financial inclusion in Nigeria through interactive visualizations and analysis.",
        }

        section {
            style: "padding: 64px 24px;",
            div {
                class: "site-layout",
                DataExplorerBody { view: view.0.clone(), page }
            }
        }

        NewsletterSection {}
    }
}

#[component]
fn DataExplorerBody(view: ReadSignal<ExplorerView>, page: ReadSignal<u64>) -> Element {
    let guard = use_hook(RequestGuard::default);
    let mut listing = use_resource(move || {
        let query = view.read().query.clone();
        let page = *page.read();
        let guard = guard.clone();
        async move {
            let ticket = guard.issue();
            let result = fetch_listing_page(query, page).await;
            if guard.is_current(ticket) { Some(result) } else { None }
        }
    });
    use_effect(move || {
        let _ = view.read();
        let _ = page.read();
        listing.clear();
        listing.restart();
    });

    let state = use_memo(move || ListingFetchState::from_resource(listing.read().as_ref()));

    // checkbox edits accumulate here; nothing applies until the button
    let mut pending_query = use_signal(|| view.read().query.clone());
    use_effect(move || {
        let applied = view.read().query.clone();
        pending_query.set(applied);
    });

    let goto = Callback::new(move |(new_view, new_page): (ExplorerView, u64)| {
        navigator().push(Route::data_explorer(new_view, new_page));
    });

    let set_content_type = Callback::new(move |value: String| {
        let mut new_view = view.read().clone();
        new_view.content_type = value;
        goto((new_view, 1));
    });
    let apply_filters = Callback::new(move |()| {
        let mut new_view = view.read().clone();
        new_view.query.filters = pending_query.read().filters.clone();
        goto((new_view, 1));
    });
    let clear_filters = Callback::new(move |()| {
        goto((ExplorerView::default(), 1));
    });
    let submit_search = Callback::new(move |text: String| {
        let mut new_view = view.read().clone();
        new_view.query.search = text;
        goto((new_view, 1));
    });
    let set_page = Callback::new(move |new_page: u64| {
        goto((view.read().clone(), new_page));
    });

    let current_view = view.read().clone();
    let state_now = state.read().clone();
    let result_page = state_now.page();

    // content-type pills are address-bar state only; the query the
    // content source sees never includes them
    let pills: Vec<Element> = CONTENT_TYPE_TABS
        .iter()
        .map(|(value, label)| {
            let value = *value;
            let style = if current_view.content_type == value {
                "padding: 9px 22px; border-radius: 9999px; font-size: 14px; background-color: #0C8E61; color: white; border: none; cursor: pointer;"
            } else {
                "padding: 9px 22px; border-radius: 9999px; font-size: 14px; background-color: #F3F4F6; color: #374151; border: none; cursor: pointer;"
            };
            rsx! {
                button {
                    key: "{value}",
                    style: style,
                    onclick: move |_| set_content_type(value.to_string()),
                    "{label}"
                }
            }
        })
        .collect();

    let error_box = match state_now.error() {
        Some(message) => rsx! {
            ComponentErrorDisplay { error_txt: format!("Error loading data: {message}") }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 14px; margin-bottom: 32px;",
            {pills.into_iter()}
        }

        FilterPanel {
            pending_query,
            on_apply: apply_filters,
            on_clear: clear_filters,
        }

        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                justify-content: space-between;
                align-items: center;
                gap: 16px;
                margin-bottom: 32px;
            ",
            ResultsCount {
                is_loading: state_now.is_loading(),
                page: result_page.clone(),
            }
            SearchBox {
                initial: current_view.query.search.clone(),
                on_submit: submit_search,
            }
        }

        {error_box}

        if state_now.is_loading() {
            LoadingCards {}
        } else if result_page.items.is_empty() {
            div {
                style: "text-align: center; padding: 32px; color: #4B5563;",
                "No posts found"
            }
        } else {
            div {
                class: "card-grid",
                for item in result_page.items.iter().cloned() {
                    ResourceCard { key: "{item.id}", item }
                }
            }
        }

        PaginationControls {
            current_page: *page.read(),
            total_pages: result_page.total_pages,
            on_navigate: set_page,
        }
    }
}
