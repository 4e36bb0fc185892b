//! FAQ accordion: one item expanded at a time.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdExpandLess, MdExpandMore};

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "What is the Inclusion for All initiative?",
        "A multi-faceted advocacy programme that seeks to deepen knowledge of the impact of exclusion on marginalised communities while advocating for the barriers to their inclusion to be removed.",
    ),
    (
        "Who does financial exclusion affect most?",
        "The excluded are more likely to be women, young, and living in rural areas, where identity documentation, cost of entry and distance to an access point all compound one another.",
    ),
    (
        "How is the initiative funded?",
        "Through a coalition of partner organisations across the financial-services ecosystem, alongside philanthropic funders who back the research agenda.",
    ),
    (
        "How can my organisation contribute?",
        "Join as an ecosystem partner, co-fund research, or share your own data and programmes through the resource centre. Use the get-involved form to start the conversation.",
    ),
];

#[component]
pub fn FaqAccordion() -> Element {
    let mut expanded = use_signal(|| None::<usize>);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            for (index, (question, answer)) in FAQ_ITEMS.iter().enumerate() {
                div {
                    key: "{question}",
                    style: "
                        background-color: white;
                        border: 1px solid #E5E7EB;
                        border-radius: 12px;
                        overflow: hidden;
                    ",
                    button {
                        style: "
                            width: 100%;
                            display: flex;
                            flex-direction: row;
                            justify-content: space-between;
                            align-items: center;
                            gap: 12px;
                            background: none;
                            border: none;
                            padding: 18px 20px;
                            cursor: pointer;
                            text-align: left;
                            font-size: 16px;
                            font-weight: 600;
                            color: #111827;
                        ",
                        onclick: move |_| {
                            let current = *expanded.read();
                            expanded.set(if current == Some(index) { None } else { Some(index) });
                        },
                        "{question}"
                        if *expanded.read() == Some(index) {
                            Icon { icon: MdExpandLess, style: "width: 22px; height: 22px; color: #6B7280; flex-shrink: 0;" }
                        } else {
                            Icon { icon: MdExpandMore, style: "width: 22px; height: 22px; color: #6B7280; flex-shrink: 0;" }
                        }
                    }
                    if *expanded.read() == Some(index) {
                        div {
                            style: "padding: 0 20px 18px 20px; font-size: 15px; color: #4B5563; line-height: 1.7;",
                            "{answer}"
                        }
                    }
                }
            }
        }
    }
}
