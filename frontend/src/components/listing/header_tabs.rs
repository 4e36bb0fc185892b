//! The two wide tabs splitting the resource centre.

use dioxus::prelude::*;

use crate::data_definitions::view_state::ResourcesTab;

#[component]
pub fn HeaderTabs(active: ResourcesTab, on_change: Callback<ResourcesTab>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                border-bottom: 1px solid #E5E7EB;
                margin-bottom: 32px;
            ",
            WideTab {
                label: "Resources from Inclusion For All",
                selected: active == ResourcesTab::Internal,
                onclick: move |_| on_change(ResourcesTab::Internal),
            }
            WideTab {
                label: "Ecosystem Resources",
                selected: active == ResourcesTab::Ecosystem,
                onclick: move |_| on_change(ResourcesTab::Ecosystem),
            }
        }
    }
}

#[component]
fn WideTab(label: String, selected: bool, onclick: Callback<()>) -> Element {
    rsx! {
        button {
            style: if selected {
                "flex: 1; padding: 14px 24px; font-size: 17px; font-weight: 600; color: #111827; background: none; border: none; border-bottom: 2px solid #FE6800; cursor: pointer;"
            } else {
                "flex: 1; padding: 14px 24px; font-size: 17px; color: #4B5563; background: none; border: none; border-bottom: 2px solid transparent; cursor: pointer;"
            },
            onclick: move |_| onclick(()),
            "{label}"
        }
    }
}
