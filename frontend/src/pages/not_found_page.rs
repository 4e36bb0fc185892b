use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    rsx! {
        Title { "Page Not Found - Inclusion For All" }
        section {
            style: "
                padding: 120px 24px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                text-align: center;
            ",
            h1 {
                style: "font-family: 'Cormorant Garamond', serif; font-size: 64px; font-weight: 700; color: #111827;",
                "404"
            }
            p {
                style: "font-size: 18px; color: #4B5563;",
                "The page you are looking for doesn't exist or has been moved."
            }
            Link {
                to: Route::HomePage {},
                span {
                    style: "
                        display: inline-block;
                        margin-top: 8px;
                        background-color: #0C8E61;
                        color: white;
                        font-weight: 600;
                        padding: 12px 28px;
                        border-radius: 9999px;
                    ",
                    "Back to Home"
                }
            }
        }
    }
}
