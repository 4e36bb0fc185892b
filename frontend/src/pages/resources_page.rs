//! Resource centre: internal resources and the ecosystem directory.

use dioxus::prelude::*;

use common::ecosystem::EcosystemKind;
use common::listing_query::FilterCategory;

use crate::api::listing_api::{fetch_ecosystem_page, fetch_listing_page, probe_content_types};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::hero::PageHero;
use crate::components::listing::category_tabs::CategoryTabs;
use crate::components::listing::filter_dropdown::FilterDropdown;
use crate::components::listing::header_tabs::HeaderTabs;
use crate::components::listing::organisation_card::OrganisationCard;
use crate::components::listing::pagination::PaginationControls;
use crate::components::listing::resource_card::ResourceCard;
use crate::components::listing::resource_type_nav::ResourceTypeNav;
use crate::components::listing::results_count::ResultsCount;
use crate::components::loading::LoadingCards;
use crate::components::newsletter_section::NewsletterSection;
use crate::data_definitions::listing_state::ListingFetchState;
use crate::data_definitions::request_guard::RequestGuard;
use crate::data_definitions::url_param::UrlParam;
use crate::data_definitions::view_state::{ResourcesTab, ResourcesView};
use crate::routes::Route;

#[component]
pub fn ResourcesPage(view: UrlParam<ResourcesView>, page: u64) -> Element {
    rsx! {
        Title { "Resource Centre - Inclusion For All" }
        document::Meta {
            name: "description",
            content: "Access our comprehensive collection of research, reports, and insights on financial inclusion in Nigeria.",
        }

        PageHero {
            title: "Resource Centre",
            body_text: "Access our comprehensive collection of research, reports, and insights on financial inclusion in Nigeria.",
        }

        section {
            style: "padding: 64px 24px;",
            div {
                class: "site-layout",
                ResourcesBody { view: view.0.clone(), page }
            }
        }

        NewsletterSection {}
    }
}

#[component]
fn ResourcesBody(view: ReadSignal<ResourcesView>, page: ReadSignal<u64>) -> Element {
    // one probe per visit; a failed probe means "no custom types" and
    // every ecosystem fetch takes the fallback path
    let support_probe = use_resource(|| probe_content_types());
    let support = use_memo(move || {
        support_probe
            .read()
            .clone()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    let guard = use_hook(RequestGuard::default);
    let mut listing = use_resource(move || {
        let view = view.read().clone();
        let page = *page.read();
        let support = support();
        let guard = guard.clone();
        async move {
            let ticket = guard.issue();
            let result = match view.main_tab {
                ResourcesTab::Internal => fetch_listing_page(view.query, page).await,
                ResourcesTab::Ecosystem => {
                    fetch_ecosystem_page(view.kind, view.ecosystem_query, page, support).await
                }
            };
            if guard.is_current(ticket) { Some(result) } else { None }
        }
    });
    // selection or page changes restart the fetch cycle
    use_effect(move || {
        let _ = view.read();
        let _ = page.read();
        listing.clear();
        listing.restart();
    });

    let state = use_memo(move || ListingFetchState::from_resource(listing.read().as_ref()));

    let goto = Callback::new(move |(new_view, new_page): (ResourcesView, u64)| {
        navigator().push(Route::resources(new_view, new_page));
    });

    // every selection change resets to the first page
    let set_main_tab = Callback::new(move |tab: ResourcesTab| {
        let mut new_view = view.read().clone();
        new_view.main_tab = tab;
        goto((new_view, 1));
    });
    let set_category = Callback::new(move |slug: String| {
        let mut new_view = view.read().clone();
        new_view.query.category = slug;
        goto((new_view, 1));
    });
    let set_kind = Callback::new(move |kind: EcosystemKind| {
        let mut new_view = view.read().clone();
        new_view.kind = kind;
        goto((new_view, 1));
    });
    let set_organisation_type = Callback::new(move |value: String| {
        let mut new_view = view.read().clone();
        new_view
            .ecosystem_query
            .set_single(FilterCategory::OrganisationType, &value);
        goto((new_view, 1));
    });
    let set_resource_type = Callback::new(move |value: String| {
        let mut new_view = view.read().clone();
        new_view
            .ecosystem_query
            .set_single(FilterCategory::ResourceType, &value);
        goto((new_view, 1));
    });
    let set_country = Callback::new(move |value: String| {
        let mut new_view = view.read().clone();
        new_view
            .ecosystem_query
            .set_single(FilterCategory::Country, &value);
        goto((new_view, 1));
    });
    let set_page = Callback::new(move |new_page: u64| {
        goto((view.read().clone(), new_page));
    });

    let current_view = view.read().clone();
    let state_now = state.read().clone();
    let result_page = state_now.page();

    let error_box = match state_now.error() {
        Some(message) => rsx! {
            ComponentErrorDisplay { error_txt: message }
        },
        None => rsx! {},
    };
    let empty_text = if current_view.main_tab == ResourcesTab::Internal {
        "No posts found".to_string()
    } else {
        format!("No {} found", current_view.kind.label().to_lowercase())
    };

    rsx! {
        HeaderTabs { active: current_view.main_tab, on_change: set_main_tab }

        if current_view.main_tab == ResourcesTab::Internal {
            CategoryTabs { active: current_view.query.category.clone(), on_change: set_category }

            div { style: "border-bottom: 1px solid #F3F4F6; margin-bottom: 32px;" }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 32px;",
                ResultsCount {
                    is_loading: state_now.is_loading(),
                    page: result_page.clone(),
                }
                span { style: "color: #4B5563; font-size: 14px;", "SORT BY" }
            }
        } else {
            ResourceTypeNav { active: current_view.kind, on_change: set_kind }

            div { style: "border-bottom: 1px solid #F3F4F6; margin-bottom: 32px;" }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    justify-content: flex-end;
                    align-items: center;
                    gap: 16px;
                    margin-bottom: 32px;
                ",
                span {
                    style: "margin-right: auto; color: #4B5563; font-size: 15px;",
                    "Showing: {current_view.kind.label()}"
                }

                if current_view.kind == EcosystemKind::Organisations {
                    FilterDropdown {
                        label: "ORGANISATION TYPE",
                        category: FilterCategory::OrganisationType,
                        value: current_view.ecosystem_query.single_value(FilterCategory::OrganisationType),
                        on_change: set_organisation_type,
                    }
                } else {
                    FilterDropdown {
                        label: "RESOURCE TYPE",
                        category: FilterCategory::ResourceType,
                        value: current_view.ecosystem_query.single_value(FilterCategory::ResourceType),
                        on_change: set_resource_type,
                    }
                }
                FilterDropdown {
                    label: "BY COUNTRY",
                    category: FilterCategory::Country,
                    value: current_view.ecosystem_query.single_value(FilterCategory::Country),
                    on_change: set_country,
                }
            }
        }

        {error_box}

        if state_now.is_loading() {
            LoadingCards {}
        } else if result_page.items.is_empty() {
            div {
                style: "text-align: center; padding: 32px; color: #4B5563;",
                "{empty_text}"
            }
        } else {
            div {
                class: "card-grid",
                for item in result_page.items.iter().cloned() {
                    if current_view.main_tab == ResourcesTab::Ecosystem
                        && current_view.kind == EcosystemKind::Organisations
                    {
                        OrganisationCard { key: "{item.id}", item }
                    } else if current_view.main_tab == ResourcesTab::Ecosystem {
                        ResourceCard {
                            key: "{item.id}",
                            category_label: item.resource_type_label(),
                            item,
                        }
                    } else {
                        ResourceCard { key: "{item.id}", item }
                    }
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
