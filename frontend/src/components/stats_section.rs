//! Headline exclusion statistics.

use dioxus::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("38M", "adults completely excluded from the financial system"),
    ("59M", "adults without a bank account"),
    ("60%", "of the excluded live in rural areas"),
    ("55%", "of the excluded are women"),
];

#[component]
pub fn StatsSection() -> Element {
    rsx! {
        section {
            style: "background-color: #1C212D; color: white; padding: 64px 24px;",
            div {
                class: "site-layout",
                h2 {
                    style: "
                        font-family: 'Cormorant Garamond', serif;
                        font-size: 36px;
                        font-weight: 700;
                        margin-bottom: 40px;
                    ",
                    "Exclusion in numbers"
                }
                div {
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 32px;
                    ",
                    for (value, caption) in STATS.iter() {
                        div {
                            key: "{value}",
                            style: "display: flex; flex-direction: column; gap: 8px;",
                            span {
                                style: "font-size: 52px; font-weight: 700; color: #FEC90C;",
                                "{value}"
                            }
                            span {
                                style: "font-size: 15px; color: rgba(255,255,255,0.8); line-height: 1.5;",
                                "{caption}"
                            }
                        }
                    }
                }
            }
        }
    }
}
