//! Home page strip of data-story reports.

use dioxus::prelude::*;

use common::content_item::ContentItem;
use common::site_const::HOME_POSTS_COUNT;

use crate::components::loading::LoadingIndicator;
use crate::data_definitions::view_state::ExplorerView;
use crate::routes::Route;

#[component]
pub fn DataStoriesSection(
    reports: ReadSignal<Option<Result<Vec<ContentItem>, ServerFnError>>>,
) -> Element {
    let grid = match reports.read().as_ref() {
        Some(Ok(reports)) if !reports.is_empty() => rsx! {
            div {
                class: "card-grid",
                for report in reports.iter().take(HOME_POSTS_COUNT as usize).cloned() {
                    DataStoryCard { key: "{report.id}", report }
                }
            }
        },
        Some(Ok(_)) => rsx! {
            div {
                style: "text-align: center; color: #6B7280; padding: 32px;",
                "No data stories published yet."
            }
        },
        Some(Err(_)) => rsx! {
            div {
                style: "text-align: center; color: #6B7280; padding: 32px;",
                "Data stories are unavailable right now."
            }
        },
        None => rsx! { LoadingIndicator {} },
    };

    rsx! {
        section {
            style: "padding: 80px 24px; background-color: #F9FAFB;",
            div {
                class: "site-layout",
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        justify-content: space-between;
                        align-items: baseline;
                        flex-wrap: wrap;
                        gap: 12px;
                        margin-bottom: 40px;
                    ",
                    h2 {
                        style: "
                            font-family: 'Cormorant Garamond', serif;
                            font-size: 40px;
                            font-weight: 700;
                            color: #111827;
                        ",
                        "Data Stories"
                    }
                    Link {
                        to: Route::data_explorer(ExplorerView::default(), 1),
                        span {
                            style: "color: #0C8E61; font-weight: 600; font-size: 15px;",
                            "Open the Data Explorer"
                        }
                    }
                }

                {grid}
            }
        }
    }
}

#[component]
fn DataStoryCard(report: ReadSignal<ContentItem>) -> Element {
    let report = report.read().clone();
    let image_url = report
        .image_url
        .clone()
        .unwrap_or_else(|| crate::components::FALLBACK_IMAGE.to_string());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                border: 1px solid #E5E7EB;
                border-radius: 16px;
                overflow: hidden;
                background-color: white;
            ",
            img {
                src: "{image_url}",
                alt: "{report.title}",
                loading: "lazy",
                style: "width: 100%; height: 180px; object-fit: cover; background-color: #F3F4F6;",
            }
            div {
                style: "padding: 20px; display: flex; flex-direction: column; gap: 10px;",
                h3 {
                    style: "font-size: 17px; font-weight: 600; color: #111827; line-height: 1.4;",
                    Link {
                        to: Route::BlogPostPage { slug: report.slug.clone() },
                        "{report.title}"
                    }
                }
                span {
                    style: "font-size: 13px; color: #6B7280;",
                    "{report.display_date()}"
                }
            }
        }
    }
}
