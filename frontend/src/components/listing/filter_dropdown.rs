//! Single-select dropdown for one filter category.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;

use common::listing_query::FilterCategory;

#[component]
pub fn FilterDropdown(
    label: String,
    category: FilterCategory,
    value: String,
    on_change: Callback<String>,
) -> Element {
    let mut open = use_signal(|| false);

    let options = category.options();
    let selected_label = options
        .iter()
        .find(|opt| opt.value == value)
        .map(|opt| opt.label)
        .unwrap_or("");

    let menu_items: Vec<Element> = options.iter().map(|opt| {
        let opt_value = opt.value;
        let opt_label = if opt.label.is_empty() { "All" } else { opt.label };
        let style = if opt.value == value {
            "display: block; width: 100%; text-align: left; padding: 9px 16px; font-size: 13px; background-color: #F3F4F6; color: #111827; border: none; cursor: pointer;"
        } else {
            "display: block; width: 100%; text-align: left; padding: 9px 16px; font-size: 13px; background: none; color: #374151; border: none; cursor: pointer;"
        };
        rsx! {
            button {
                key: "{opt_value}",
                role: "menuitem",
                style: style,
                onclick: move |_| {
                    on_change(opt_value.to_string());
                    open.set(false);
                },
                "{opt_label}"
            }
        }
    }).collect();

    rsx! {
        div {
            style: "position: relative; display: inline-block;",

            button {
                style: "
                    display: inline-flex;
                    align-items: center;
                    gap: 6px;
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    background-color: white;
                    color: #374151;
                    font-size: 13px;
                    font-weight: 500;
                    padding: 9px 14px;
                    cursor: pointer;
                ",
                aria_expanded: *open.read(),
                aria_haspopup: "true",
                onclick: move |_| {
                    let was_open = *open.read();
                    open.set(!was_open);
                },
                "{label}"
                if !selected_label.is_empty() {
                    span { style: "color: #111827;", "{selected_label}" }
                }
                Icon { icon: MdArrowDropDown, style: "width: 18px; height: 18px; color: #6B7280;" }
            }

            if *open.read() {
                // click-away layer under the menu
                div {
                    style: "position: fixed; inset: 0; z-index: 40;",
                    onclick: move |_| open.set(false),
                }
                div {
                    role: "menu",
                    style: "
                        position: absolute;
                        right: 0;
                        margin-top: 8px;
                        width: 224px;
                        background-color: white;
                        border: 1px solid #E5E7EB;
                        border-radius: 8px;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                        z-index: 50;
                        padding: 4px 0;
                    ",
                    {menu_items.into_iter()}
                }
            }
        }
    }
}
