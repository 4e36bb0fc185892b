//! Hero banners: the home landing hero and the generic page hero.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn HomeHero() -> Element {
    rsx! {
        section {
            id: "x-home-hero",
            style: "
                background-color: #0C8E61;
                color: white;
                padding: 96px 24px;
            ",
            div {
                class: "site-layout",
                div {
                    style: "max-width: 720px; display: flex; flex-direction: column; gap: 24px;",
                    h1 {
                        style: "
                            font-family: 'Cormorant Garamond', serif;
                            font-size: 56px;
                            font-weight: 700;
                            line-height: 1.1;
                        ",
                        "Financial inclusion for every Nigerian"
                    }
                    p {
                        style: "font-size: 20px; line-height: 1.6; color: rgba(255,255,255,0.92);",
                        "More than 38 million Nigerian adults are completely excluded from the financial system. We advocate for the policies, research and partnerships that bring them in."
                    }
                    div {
                        style: "display: flex; flex-direction: row; gap: 16px; flex-wrap: wrap;",
                        Link {
                            to: Route::resources_default(),
                            span {
                                style: "
                                    display: inline-block;
                                    background-color: #FEC90C;
                                    color: #111827;
                                    font-weight: 600;
                                    padding: 12px 28px;
                                    border-radius: 9999px;
                                ",
                                "Explore Resources"
                            }
                        }
                        Link {
                            to: Route::AboutPage {},
                            span {
                                style: "
                                    display: inline-block;
                                    border: 2px solid white;
                                    color: white;
                                    font-weight: 600;
                                    padding: 12px 28px;
                                    border-radius: 9999px;
                                ",
                                "About the Initiative"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shared banner for the inner pages.
#[component]
pub fn PageHero(title: String, body_text: String) -> Element {
    rsx! {
        section {
            style: "
                background-color: #1C212D;
                color: white;
                padding: 72px 24px;
            ",
            div {
                class: "site-layout",
                div {
                    style: "max-width: 720px; display: flex; flex-direction: column; gap: 16px;",
                    h1 {
                        style: "
                            font-family: 'Cormorant Garamond', serif;
                            font-size: 44px;
                            font-weight: 700;
                        ",
                        "{title}"
                    }
                    p {
                        style: "font-size: 18px; line-height: 1.6; color: rgba(255,255,255,0.85);",
                        "{body_text}"
                    }
                }
            }
        }
    }
}
