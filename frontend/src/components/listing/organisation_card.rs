//! Card for one ecosystem organisation record.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_communication_icons::MdLocationOn;

use common::content_item::ContentItem;

#[component]
pub fn OrganisationCard(item: ContentItem) -> Element {
    let image_url = item
        .image_url
        .clone()
        .unwrap_or_else(|| crate::components::FALLBACK_IMAGE.to_string());

    let country_row = match item.country_label() {
        Some(country) => rsx! {
            div {
                style: "display: flex; align-items: center; gap: 4px; color: #4B5563; font-size: 13px;",
                Icon { icon: MdLocationOn, style: "width: 15px; height: 15px; color: #4B5563;" }
                "{country}"
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                overflow: hidden;
                border-radius: 12px;
                background-color: white;
                border: 1px solid #E5E7EB;
                height: 100%;
            ",
            div {
                style: "height: 190px; background-color: #F3F4F6;",
                img {
                    src: "{image_url}",
                    alt: "{item.title}",
                    loading: "lazy",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
            }
            div {
                style: "padding: 18px; display: flex; flex-direction: column; gap: 10px;",
                span {
                    style: "
                        align-self: flex-start;
                        background-color: #F3F4F6;
                        color: #1F2937;
                        font-size: 12px;
                        font-weight: 500;
                        padding: 5px 10px;
                        border-radius: 9999px;
                    ",
                    "{item.organisation_type_label()}"
                }
                h3 {
                    style: "font-size: 19px; font-weight: 600; color: #111827; line-height: 1.35;",
                    a {
                        href: "{item.link}",
                        target: "_blank",
                        rel: "noopener",
                        "{item.title}"
                    }
                }
                {country_row}
            }
        }
    }
}
