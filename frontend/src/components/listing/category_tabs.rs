//! Category pills for the internal-resources listing.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use common::listing_query::CATEGORY_TABS;

#[component]
pub fn CategoryTabs(active: String, on_change: Callback<String>) -> Element {
    let pills: Vec<Element> = CATEGORY_TABS.iter().map(|tab| {
        let slug = tab.slug;
        let style = if active == slug {
            "padding: 9px 18px; border-radius: 9999px; font-size: 14px; font-weight: 500; background-color: #0C8E61; color: white; border: none; cursor: pointer;"
        } else {
            "padding: 9px 18px; border-radius: 9999px; font-size: 14px; font-weight: 500; background-color: white; color: #4B5563; border: 1px solid #E5E7EB; cursor: pointer;"
        };
        rsx! {
            button {
                key: "{slug}",
                style: style,
                onclick: move |_| on_change(slug.to_string()),
                "{tab.label}"
            }
        }
    }).collect();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 14px;
                align-items: center;
                margin-bottom: 32px;
            ",
            {pills.into_iter()}

            div {
                style: "margin-left: auto; position: relative;",
                input {
                    r#type: "text",
                    placeholder: "Search for anything",
                    style: "
                        padding: 9px 16px 9px 38px;
                        border-radius: 9999px;
                        border: 1px solid #E5E7EB;
                        font-size: 14px;
                        outline: none;
                    ",
                }
                span {
                    style: "position: absolute; left: 12px; top: 50%; transform: translateY(-50%);",
                    Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: #6B7280;" }
                }
            }
        }
    }
}
