//! Error display components for rendering and fetch failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color: #B91C1C; font-size: 44px; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color: #7F1D1D; font-size: 22px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color: #0C8E61; font-size: 22px; border: 1px solid #0C8E61; padding: 10px; border-radius: 8px; margin: 15px; display: inline-block;",
                        "Return to Home Page"
                    }
                    pre {
                        style: "color: #111827; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Inline error box for a failed fetch: the message is shown verbatim
/// and the surrounding page keeps rendering its other sections.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                background-color: #FEF2F2;
                border-radius: 12px;
                padding: 32px 16px;
                margin-bottom: 32px;
            ",

            div {
                style: "color: #B91C1C; font-size: 17px; text-align: center; max-width: 640px;",
                "{error_txt}"
            }

            {children}
        }
    }
}
