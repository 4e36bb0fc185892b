use dioxus::prelude::*;

use crate::components::faq_accordion::FaqAccordion;
use crate::components::hero::PageHero;
use crate::components::newsletter_section::NewsletterSection;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Title { "About Us - Inclusion For All" }
        document::Meta {
            name: "description",
            content: "Understanding and mitigating the impact of exclusion on marginalised communities.",
        }

        PageHero {
            title: "About Us",
            body_text: "Understanding and mitigating the impact of exclusion on marginalised communities. With more than 38 million Nigerian adults completely excluded from the financial system and 59 million without bank accounts, financial exclusion remains a significant contributor to wider exclusion challenges, and is a core focus of the Inclusion for All initiative.",
        }

        BarriersSection {}
        FaqSection {}
        NewsletterSection {}
    }
}

#[component]
fn BarriersSection() -> Element {
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
                            font-size: 52px;
                            font-weight: 700;
                            color: #FF6B00;
                            line-height: 1.1;
                        ",
                        "Multi-faceted barriers exist, extenuating exclusion"
                    }
                    p {
                        style: "font-size: 18px; line-height: 1.7; color: #111827; font-weight: 500;",
                        "Marginalised communities face a wide variety of barriers to inclusion, from ownership of the identity documentation required to access services, to the cost of entry and proximity of an access point of those services as well as cultural, religious and trust barriers."
                    }
                }

                div {
                    style: "
                        margin-top: 56px;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 28px;
                    ",
                    BarrierCard {
                        background: "#0C8E61",
                        text_color: "white",
                        title: "Understanding Exclusion",
                        body: "The Inclusion for All initiative is a multi-faceted advocacy programme that seeks to deepen our knowledge and understanding of the impact of exclusion on marginalised communities, and on Nigeria as a whole, while advocating for the barriers to their inclusion to be removed.",
                    }
                    BarrierCard {
                        background: "#FEC90C",
                        text_color: "#111827",
                        title: "Supporting Communities",
                        body: "Marginalised communities are desperately in need of help and support but they are the most difficult groups to access in order to provide it. They are more likely to be women, young and to live in rural areas. We want everyone to have access to the support and services that give them the ability to enhance their lives.",
                    }
                }
            }
        }
    }
}

#[component]
fn BarrierCard(background: String, text_color: String, title: String, body: String) -> Element {
    rsx! {
        div {
            style: "
                background-color: {background};
                color: {text_color};
                border-radius: 16px;
                padding: 32px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            h3 {
                style: "font-family: 'Cormorant Garamond', serif; font-size: 30px; font-weight: 700;",
                "{title}"
            }
            p { style: "font-size: 15px; line-height: 1.7; font-weight: 500;", "{body}" }
        }
    }
}

#[component]
fn FaqSection() -> Element {
    rsx! {
        section {
            style: "padding: 80px 24px; background-color: #F9FAFB;",
            div {
                class: "site-layout",
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 48px;
                ",
                div {
                    h2 {
                        style: "
                            font-family: 'Cormorant Garamond', serif;
                            font-size: 38px;
                            font-weight: 700;
                            color: #111827;
                            margin-bottom: 14px;
                        ",
                        "Frequently Asked Questions"
                    }
                    p {
                        style: "font-size: 16px; color: #4B5563;",
                        "Answer you're looking for not here? "
                        a {
                            href: "mailto:hello@inclusion-for-all.org",
                            style: "color: #FE6800; font-weight: 600;",
                            "Get in touch"
                        }
                    }
                }
                FaqAccordion {}
            }
        }
    }
}
