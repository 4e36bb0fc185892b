//! Loading placeholders for in-flight fetches.

use dioxus::prelude::*;

/// Pulsing card placeholders, one listing page's worth.
#[component]
pub fn LoadingCards() -> Element {
    rsx! {
        div {
            class: "card-grid",
            for slot in 0..common::site_const::PAGE_SIZE {
                div {
                    key: "{slot}",
                    class: "loading-pulse",
                    style: "
                        background-color: #F3F4F6;
                        border-radius: 12px;
                        height: 256px;
                    ",
                }
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: #6B7280; font-size: 18px; padding: 32px; text-align: center;",
            "Loading results..."
        }
    }
}
