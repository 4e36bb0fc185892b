//! Site chrome: header navigation, footer, and the routed page between.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdClose, MdMenu};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

/// Shared page frame around every route.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            id: "x-site-container",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
                width: 100%;
            ",

            SiteHeader {}

            main {
                id: "x-page-container",
                style: "flex-grow: 1; width: 100%;",
                GlobalErrorBoundary {
                    boundary_name: "Page".to_string(),
                    Outlet::<Route> {}
                }
            }

            SiteFooter {}
        }
    }
}

#[component]
fn SiteHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            id: "x-site-header",
            style: "
                position: sticky;
                top: 0;
                z-index: 100;
                background-color: white;
                border-bottom: 1px solid #E5E7EB;
            ",
            div {
                class: "site-layout",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    height: 72px;
                    padding: 0 24px;
                ",

                Link {
                    to: Route::HomePage {},
                    span {
                        style: "font-family: 'Cormorant Garamond', serif; font-size: 26px; font-weight: 700; color: #0C8E61;",
                        "Inclusion For All"
                    }
                }

                nav {
                    class: "header-nav-links",
                    style: "display: flex; flex-direction: row; gap: 28px; align-items: center;",
                    HeaderLink { to: Route::HomePage {}, label: "Home" }
                    HeaderLink { to: Route::AboutPage {}, label: "About Us" }
                    HeaderLink { to: Route::resources_default(), label: "Resource Centre" }
                    HeaderLink { to: Route::data_explorer_default(), label: "Data Explorer" }
                }

                button {
                    class: "header-menu-button",
                    style: "
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 8px;
                    ",
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        let open = *menu_open.read();
                        menu_open.set(!open);
                    },
                    if *menu_open.read() {
                        Icon { icon: MdClose, style: "width: 26px; height: 26px; color: #111827;" }
                    } else {
                        Icon { icon: MdMenu, style: "width: 26px; height: 26px; color: #111827;" }
                    }
                }
            }

            if *menu_open.read() {
                div {
                    class: "header-mobile-menu",
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 4px;
                        padding: 12px 24px 20px 24px;
                        border-top: 1px solid #E5E7EB;
                        background-color: white;
                    ",
                    onclick: move |_| menu_open.set(false),
                    HeaderLink { to: Route::HomePage {}, label: "Home" }
                    HeaderLink { to: Route::AboutPage {}, label: "About Us" }
                    HeaderLink { to: Route::resources_default(), label: "Resource Centre" }
                    HeaderLink { to: Route::data_explorer_default(), label: "Data Explorer" }
                }
            }
        }
    }
}

#[component]
fn HeaderLink(to: Route, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "
                    color: #111827;
                    font-size: 15px;
                    font-weight: 500;
                    padding: 8px 0;
                    display: inline-block;
                ",
                "{label}"
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer {
            id: "x-site-footer",
            style: "
                background-color: #1C212D;
                color: white;
                padding: 48px 24px 24px 24px;
            ",
            div {
                class: "site-layout",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 40px;
                    justify-content: space-between;
                ",

                div {
                    style: "max-width: 380px; display: flex; flex-direction: column; gap: 12px;",
                    span {
                        style: "font-family: 'Cormorant Garamond', serif; font-size: 24px; font-weight: 700;",
                        "Inclusion For All"
                    }
                    p {
                        style: "color: rgba(255,255,255,0.7); font-size: 14px; line-height: 1.6;",
                        "Advocating for policies that promote financial inclusion for marginalised populations in Nigeria."
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 10px;",
                    span { style: "font-weight: 600; font-size: 15px;", "Explore" }
                    FooterLink { to: Route::AboutPage {}, label: "About Us" }
                    FooterLink { to: Route::resources_default(), label: "Resource Centre" }
                    FooterLink { to: Route::data_explorer_default(), label: "Data Explorer" }
                }
            }

            div {
                class: "site-layout",
                style: "
                    border-top: 1px solid rgba(255,255,255,0.15);
                    margin-top: 40px;
                    padding-top: 20px;
                    color: rgba(255,255,255,0.5);
                    font-size: 13px;
                ",
                "© 2025 Inclusion For All. All rights reserved."
            }
        }
    }
}

#[component]
fn FooterLink(to: Route, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color: rgba(255,255,255,0.7); font-size: 14px;",
                "{label}"
            }
        }
    }
}
