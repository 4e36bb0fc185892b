//! Narrative section on the barriers driving exclusion.

use dioxus::prelude::*;

#[component]
pub fn ExclusionSection() -> Element {
    rsx! {
        section {
            style: "padding: 80px 24px;",
            div {
                class: "site-layout",
                div {
                    style: "max-width: 820px; margin: 0 auto; text-align: center; display: flex; flex-direction: column; gap: 20px;",
                    h2 {
                        style: "
                            font-family: 'Cormorant Garamond', serif;
                            font-size: 48px;
                            font-weight: 700;
                            color: #FF6B00;
                            line-height: 1.15;
                        ",
                        "Multi-faceted barriers exist, extenuating exclusion"
                    }
                    p {
                        style: "font-size: 18px; line-height: 1.7; color: #111827; font-weight: 500;",
                        "Marginalised communities face a wide variety of barriers to inclusion, from ownership of the identity documentation required to access services, to the cost of entry and proximity of an access point of those services, as well as cultural, religious and trust barriers."
                    }
                }
            }
        }
    }
}
