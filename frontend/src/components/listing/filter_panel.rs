//! Advanced-filters panel: theme and media-type checkboxes.
//!
//! Checkbox clicks edit a pending query; nothing is fetched until the
//! user applies, at which point the page pushes a new route.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use common::listing_query::{FilterCategory, ListingQuery};

#[component]
pub fn FilterPanel(
    pending_query: Signal<ListingQuery>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> Element {
    rsx! {
        div {
            style: "
                background-color: #F9FAFB;
                border-radius: 12px;
                padding: 24px;
                margin-bottom: 32px;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 16px;
                    margin-bottom: 24px;
                ",
                h2 {
                    style: "font-size: 20px; font-weight: 600; color: #111827;",
                    "Advanced Filters"
                }
                div {
                    style: "display: flex; flex-direction: row; gap: 16px; align-items: center;",
                    button {
                        style: "background: none; border: none; color: #0C8E61; font-size: 14px; font-weight: 500; cursor: pointer;",
                        onclick: move |_| on_clear(()),
                        "Clear all filters"
                    }
                    button {
                        style: "
                            background-color: #0C8E61;
                            color: white;
                            font-size: 14px;
                            font-weight: 500;
                            border: none;
                            border-radius: 9999px;
                            padding: 9px 18px;
                            cursor: pointer;
                        ",
                        onclick: move |_| on_apply(()),
                        "Apply Filters"
                    }
                }
            }

            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 24px;
                ",
                FilterGroup {
                    pending_query,
                    category: FilterCategory::Theme,
                    heading: "Filter by theme",
                    columns: 1_u32,
                }
                FilterGroup {
                    pending_query,
                    category: FilterCategory::MediaType,
                    heading: "Filter by media type",
                    columns: 2_u32,
                }
            }
        }
    }
}

#[component]
fn FilterGroup(
    pending_query: Signal<ListingQuery>,
    category: FilterCategory,
    heading: String,
    columns: u32,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            span {
                style: "font-size: 14px; font-weight: 500; color: #374151;",
                "{heading}"
            }
            div {
                style: "
                    background-color: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 10px;
                    padding: 16px;
                    display: grid;
                    grid-template-columns: repeat({columns}, 1fr);
                    gap: 10px 16px;
                    flex: 1;
                ",
                for opt in category.options().iter() {
                    FilterCheckbox {
                        key: "{opt.value}",
                        pending_query,
                        category,
                        value: opt.value.to_string(),
                        label: opt.label.to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn FilterCheckbox(
    pending_query: Signal<ListingQuery>,
    category: FilterCategory,
    value: String,
    label: String,
) -> Element {
    let checked = use_memo({
        let value = value.clone();
        move || {
            pending_query
                .read()
                .filters
                .get(&category)
                .unwrap_or(&BTreeSet::new())
                .contains(&value)
        }
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                cursor: pointer;
            ",
            onclick: move |_| {
                pending_query.write().toggle(category, &value);
            },
            if checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #0C8E61; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #9CA3AF; flex-shrink: 0;" }
            }
            span {
                style: "font-size: 14px; color: #374151;",
                "{label}"
            }
        }
    }
}
