//! Card for one article/policy record in a listing grid.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdCalendarToday, MdSchedule};

use common::content_item::ContentItem;

use crate::routes::Route;

#[component]
pub fn ResourceCard(item: ContentItem, category_label: Option<String>) -> Element {
    let image_url = item
        .image_url
        .clone()
        .unwrap_or_else(|| crate::components::FALLBACK_IMAGE.to_string());
    let chip = category_label.unwrap_or_else(|| item.category.clone());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                overflow: hidden;
                border-radius: 20px;
                border: 1px solid #E5E7EB;
                background-color: white;
                height: 100%;
            ",
            div {
                style: "height: 220px; background-color: #F3F4F6; position: relative;",
                img {
                    src: "{image_url}",
                    alt: "{item.title}",
                    loading: "lazy",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                span {
                    style: "
                        position: absolute;
                        top: 16px;
                        right: 16px;
                        background-color: #ECFDF5;
                        color: #047857;
                        font-size: 12px;
                        font-weight: 500;
                        padding: 6px 10px;
                        border-radius: 9999px;
                    ",
                    "{chip}"
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 16px; padding: 28px; flex-grow: 1;",
                h3 {
                    style: "font-size: 17px; font-weight: 500; color: #111827; line-height: 1.45;",
                    Link {
                        to: Route::BlogPostPage { slug: item.slug.clone() },
                        "{item.title}"
                    }
                }
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        gap: 16px;
                        align-items: center;
                        color: #6B7280;
                        font-size: 13px;
                        margin-top: auto;
                    ",
                    span {
                        style: "display: flex; align-items: center; gap: 6px;",
                        Icon { icon: MdCalendarToday, style: "width: 15px; height: 15px; color: #6B7280;" }
                        "{item.display_date()}"
                    }
                    span {
                        style: "display: flex; align-items: center; gap: 6px;",
                        Icon { icon: MdSchedule, style: "width: 15px; height: 15px; color: #6B7280;" }
                        "{item.read_time_minutes()} min read"
                    }
                }
            }
        }
    }
}
