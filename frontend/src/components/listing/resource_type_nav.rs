//! Organisations / policies switch for the ecosystem listing.

use dioxus::prelude::*;

use common::ecosystem::EcosystemKind;

#[component]
pub fn ResourceTypeNav(active: EcosystemKind, on_change: Callback<EcosystemKind>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 14px;
                margin-bottom: 32px;
            ",
            for kind in [EcosystemKind::Organisations, EcosystemKind::Policies] {
                button {
                    key: "{kind.label()}",
                    style: if active == kind {
                        "padding: 9px 22px; border-radius: 9999px; font-size: 14px; font-weight: 500; background-color: #0C8E61; color: white; border: none; cursor: pointer;"
                    } else {
                        "padding: 9px 22px; border-radius: 9999px; font-size: 14px; font-weight: 500; background-color: white; color: #4B5563; border: 1px solid #E5E7EB; cursor: pointer;"
                    },
                    onclick: move |_| on_change(kind),
                    "{kind.label()}"
                }
            }
        }
    }
}
