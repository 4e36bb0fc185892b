//! Home page "Latest Insights" strip.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdCalendarToday, MdSchedule};

use common::content_item::ContentItem;
use common::site_const::HOME_POSTS_COUNT;

use crate::components::loading::LoadingIndicator;
use crate::routes::Route;

#[component]
pub fn PostsSection(posts: ReadSignal<Option<Result<Vec<ContentItem>, ServerFnError>>>) -> Element {
    let grid = match posts.read().as_ref() {
        Some(Ok(posts)) => rsx! {
            div {
                class: "card-grid",
                for post in posts.iter().take(HOME_POSTS_COUNT as usize).cloned() {
                    PostCard { key: "{post.id}", post }
                }
            }
        },
        Some(Err(_)) => rsx! {
            div {
                style: "text-align: center; color: #374151; padding: 32px; background: white; border-radius: 12px;",
                "Posts are unavailable right now."
            }
        },
        None => rsx! { LoadingIndicator {} },
    };

    rsx! {
        section {
            style: "background-color: #FEC90C; padding: 80px 24px;",
            div {
                class: "site-layout",
                div {
                    style: "margin-bottom: 40px;",
                    h2 {
                        style: "
                            font-family: 'Cormorant Garamond', serif;
                            font-size: 40px;
                            font-weight: 700;
                            color: #111827;
                        ",
                        "Latest Insights"
                    }
                    p {
                        style: "margin-top: 12px; font-size: 17px; color: #374151;",
                        "Stay updated with our latest articles and research"
                    }
                }

                {grid}

                div {
                    style: "display: flex; justify-content: center; margin-top: 40px;",
                    Link {
                        to: Route::resources_default(),
                        span {
                            class: "view-all-posts",
                            "View All Posts"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: ReadSignal<ContentItem>) -> Element {
    let post = post.read().clone();
    let image_url = post
        .image_url
        .clone()
        .unwrap_or_else(|| crate::components::FALLBACK_IMAGE.to_string());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                background-color: white;
                border-radius: 16px;
                overflow: hidden;
                height: 100%;
            ",
            div {
                style: "height: 200px; background-color: #F3F4F6; position: relative;",
                img {
                    src: "{image_url}",
                    alt: "{post.title}",
                    loading: "lazy",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                span {
                    style: "
                        position: absolute;
                        top: 14px;
                        right: 14px;
                        background-color: #ECFDF5;
                        color: #047857;
                        font-size: 12px;
                        font-weight: 500;
                        padding: 5px 10px;
                        border-radius: 9999px;
                    ",
                    "{post.category}"
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 14px; padding: 24px; flex-grow: 1;",
                h3 {
                    style: "font-size: 18px; font-weight: 600; color: #111827; line-height: 1.4;",
                    Link {
                        to: Route::BlogPostPage { slug: post.slug.clone() },
                        "{post.title}"
                    }
                }
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        gap: 16px;
                        align-items: center;
                        color: #6B7280;
                        font-size: 13px;
                        margin-top: auto;
                    ",
                    span {
                        style: "display: flex; align-items: center; gap: 5px;",
                        Icon { icon: MdCalendarToday, style: "width: 15px; height: 15px; color: #6B7280;" }
                        "{post.display_date()}"
                    }
                    span {
                        style: "display: flex; align-items: center; gap: 5px;",
                        Icon { icon: MdSchedule, style: "width: 15px; height: 15px; color: #6B7280;" }
                        "{post.read_time_minutes()} min read"
                    }
                }
            }
        }
    }
}
