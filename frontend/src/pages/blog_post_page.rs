//! Single blog post page: article body, podcast player, related posts.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSchedule;
use dioxus_free_icons::icons::md_av_icons::MdPlayArrow;
use dioxus_free_icons::icons::md_content_icons::MdContentCopy;
use dioxus_free_icons::icons::md_social_icons::MdShare;

use common::content_item::ContentItem;
use common::podcast;
use common::site_const::RELATED_POSTS_COUNT;

use crate::api::posts_api::{fetch_post_by_slug, fetch_related_posts};
use crate::components::listing::resource_card::ResourceCard;
use crate::components::loading::LoadingIndicator;
use crate::components::newsletter_section::NewsletterSection;

#[component]
pub fn BlogPostPage(slug: ReadSignal<String>) -> Element {
    let mut post = use_resource(move || fetch_post_by_slug(slug.read().clone()));
    use_effect(move || {
        let _ = slug.read();
        post.clear();
        post.restart();
    });

    match post.read().as_ref() {
        None => rsx! {
            Title { "Loading... - Inclusion For All" }
            section {
                style: "padding: 96px 24px;",
                LoadingIndicator {}
            }
        },
        Some(Err(err)) => rsx! {
            Title { "Error Loading Post - Inclusion For All" }
            ErrorView { message: err.to_string() }
        },
        Some(Ok(item)) => rsx! {
            ArticleView { item: item.clone() }
        },
    }
}

#[component]
fn ErrorView(message: String) -> Element {
    rsx! {
        section {
            style: "
                padding: 96px 24px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                text-align: center;
            ",
            h1 {
                style: "font-size: 26px; font-weight: 700; color: #111827;",
                "Error Loading Post"
            }
            p { style: "font-size: 16px; color: #4B5563; max-width: 560px;", "{message}" }
            button {
                style: "
                    background-color: #0C8E61;
                    color: white;
                    font-weight: 600;
                    border: none;
                    border-radius: 9999px;
                    padding: 10px 24px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    navigator().go_back();
                },
                "Go Back"
            }
        }
    }
}

#[component]
fn ArticleView(item: ReadSignal<ContentItem>) -> Element {
    let item = item.read().clone();
    let description = item.plain_excerpt(160);
    let image_url = item
        .image_url
        .clone()
        .unwrap_or_else(|| crate::components::FALLBACK_IMAGE.to_string());
    let read_time = item.read_time_minutes();

    let player = match podcast_url(&item) {
        Some(audio_url) => rsx! {
            div {
                class: "article-column",
                style: "padding: 0 24px; margin-top: 32px;",
                PodcastPlayer { audio_url, read_time, category: item.category.clone() }
            }
        },
        None => rsx! {},
    };

    let author_row = author_row(&item);
    let tags_row = tags_row(&item);

    rsx! {
        Title { "{item.title} - Inclusion For All" }
        document::Meta { name: "description", content: "{description}" }

        section {
            style: "background-color: #F9FAFB; padding: 48px 24px 32px 24px;",
            div {
                class: "article-column",
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 10px; align-items: center; margin-bottom: 18px; font-size: 13px; color: #4B5563;",
                    span {
                        style: "
                            background-color: #ECFDF5;
                            color: #047857;
                            font-weight: 500;
                            padding: 5px 10px;
                            border-radius: 9999px;
                            font-size: 12px;
                        ",
                        "{item.category}"
                    }
                    time { datetime: "{item.date}", "{item.display_date()}" }
                    span {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdSchedule, style: "width: 14px; height: 14px; color: #4B5563;" }
                        "{read_time} min read"
                    }
                }

                h1 {
                    style: "
                        font-family: 'Cormorant Garamond', serif;
                        font-size: 38px;
                        font-weight: 700;
                        color: #111827;
                        line-height: 1.2;
                        margin-bottom: 20px;
                    ",
                    "{item.title}"
                }

                {author_row}
            }
        }

        div {
            class: "article-column",
            style: "padding: 0 24px; margin-top: 24px;",
            img {
                src: "{image_url}",
                alt: "{item.title}",
                style: "
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 14px;
                    background-color: #F3F4F6;
                ",
            }
        }

        {player}

        section {
            style: "padding: 32px 24px 48px 24px;",
            div {
                class: "article-column",

                article {
                    class: "article-body",
                    div { dangerous_inner_html: "{item.content_html}" }
                }

                {tags_row}

                ShareRow { title: item.title.clone() }
            }
        }

        ReadNext { category_id: item.category_id, exclude_id: item.id }
        NewsletterSection {}
    }
}

fn podcast_url(item: &ContentItem) -> Option<String> {
    if podcast::is_podcast(item) {
        podcast::podcast_audio_url(item)
    } else {
        None
    }
}

fn author_row(item: &ContentItem) -> Element {
    let Some(author_name) = item.author_name.clone() else {
        return rsx! {};
    };

    let avatar = match item.author_avatar_url.clone() {
        Some(avatar) => rsx! {
            img {
                src: "{avatar}",
                alt: "{author_name}",
                style: "width: 36px; height: 36px; border-radius: 9999px; object-fit: cover; background-color: #E5E7EB;",
            }
        },
        None => rsx! {},
    };
    let bio: String = item
        .author_description
        .clone()
        .unwrap_or_else(|| "Author".to_string())
        .chars()
        .take(50)
        .collect();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
            {avatar}
            div {
                p { style: "font-size: 14px; font-weight: 500; color: #111827;", "{author_name}" }
                p { style: "font-size: 12px; color: #6B7280;", "{bio}" }
            }
        }
    }
}

fn tags_row(item: &ContentItem) -> Element {
    if item.tags.is_empty() {
        return rsx! {};
    }
    let tags = item.tags.clone();

    rsx! {
        div {
            style: "margin-top: 32px; border-top: 1px solid #E5E7EB; padding-top: 24px;",
            h3 { style: "font-size: 13px; font-weight: 500; color: #374151; margin-bottom: 8px;", "Tags:" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for tag in tags {
                    span {
                        key: "{tag}",
                        style: "
                            background-color: #F3F4F6;
                            color: #374151;
                            font-size: 12px;
                            font-weight: 500;
                            padding: 5px 10px;
                            border-radius: 9999px;
                        ",
                        "{tag}"
                    }
                }
            }
        }
    }
}

#[component]
fn PodcastPlayer(audio_url: String, read_time: u64, category: String) -> Element {
    rsx! {
        div {
            style: "
                background-color: #F9FAFB;
                border-radius: 14px;
                padding: 24px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                span {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 44px;
                        height: 44px;
                        border-radius: 9999px;
                        background-color: #0C8E61;
                    ",
                    Icon { icon: MdPlayArrow, style: "width: 24px; height: 24px; color: white;" }
                }
                div {
                    h3 { style: "font-size: 16px; font-weight: 600; color: #111827;", "Listen to this Episode" }
                    p {
                        style: "font-size: 12px; color: #6B7280;",
                        "{read_time} minute episode • {category}"
                    }
                }
            }
            audio {
                src: "{audio_url}",
                controls: true,
                style: "width: 100%; border-radius: 8px;",
            }
        }
    }
}

#[component]
fn ShareRow(title: String) -> Element {
    let tweet_title = title.clone();
    let linkedin_title = title.clone();

    rsx! {
        div {
            style: "margin-top: 32px; border-top: 1px solid #E5E7EB; padding-top: 24px;",
            h3 {
                style: "font-size: 13px; font-weight: 500; color: #374151; margin-bottom: 12px;",
                "Share this article:"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 10px; flex-wrap: wrap;",
                ShareButton {
                    label: "Share on X",
                    onclick: Callback::new(move |()| {
                        if let Some(href) = current_url() {
                            open_share_window(&format!(
                                "https://twitter.com/intent/tweet?text={}&url={}",
                                encode_component(&tweet_title),
                                encode_component(&href)
                            ));
                        }
                    }),
                }
                ShareButton {
                    label: "Share on Facebook",
                    onclick: Callback::new(move |()| {
                        if let Some(href) = current_url() {
                            open_share_window(&format!(
                                "https://www.facebook.com/sharer/sharer.php?u={}",
                                encode_component(&href)
                            ));
                        }
                    }),
                }
                ShareButton {
                    label: "Share on LinkedIn",
                    onclick: Callback::new(move |()| {
                        if let Some(href) = current_url() {
                            open_share_window(&format!(
                                "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
                                encode_component(&href),
                                encode_component(&linkedin_title)
                            ));
                        }
                    }),
                }
                button {
                    aria_label: "Copy link",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        background: white;
                        color: #374151;
                        border: 1px solid #D1D5DB;
                        border-radius: 9999px;
                        padding: 8px 16px;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| copy_current_url(),
                    Icon { icon: MdContentCopy, style: "width: 15px; height: 15px; color: #374151;" }
                    "Copy link"
                }
            }
        }
    }
}

#[component]
fn ShareButton(label: String, onclick: Callback<()>) -> Element {
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                background: white;
                color: #374151;
                border: 1px solid #D1D5DB;
                border-radius: 9999px;
                padding: 8px 16px;
                font-size: 13px;
                cursor: pointer;
            ",
            onclick: move |_| onclick(()),
            Icon { icon: MdShare, style: "width: 15px; height: 15px; color: #374151;" }
            "{label}"
        }
    }
}

#[component]
fn ReadNext(category_id: ReadSignal<Option<u64>>, exclude_id: ReadSignal<u64>) -> Element {
    let related = use_resource(move || {
        let category_id = *category_id.read();
        let exclude_id = *exclude_id.read();
        async move {
            let Some(category_id) = category_id else {
                return Ok(Vec::new());
            };
            fetch_related_posts(category_id, exclude_id, RELATED_POSTS_COUNT).await
        }
    });

    let grid = match related.read().as_ref() {
        Some(Ok(posts)) if !posts.is_empty() => rsx! {
            div {
                class: "card-grid",
                for post in posts.iter().cloned() {
                    ResourceCard { key: "{post.id}", item: post }
                }
            }
        },
        Some(_) => rsx! {
            div {
                style: "text-align: center; color: #6B7280; padding: 24px; font-size: 14px;",
                "No related posts found"
            }
        },
        None => rsx! { LoadingIndicator {} },
    };

    rsx! {
        section {
            style: "background-color: #F9FAFB; padding: 48px 24px;",
            div {
                class: "site-layout",
                h2 {
                    style: "
                        font-family: 'Cormorant Garamond', serif;
                        font-size: 32px;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 28px;
                    ",
                    "Read Next"
                }

                {grid}
            }
        }
    }
}

fn current_url() -> Option<String> {
    web_sys::window().and_then(|window| window.location().href().ok())
}

fn open_share_window(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

fn copy_current_url() {
    if let Some(window) = web_sys::window() {
        if let Ok(href) = window.location().href() {
            let _ = window.navigator().clipboard().write_text(&href);
        }
    }
}

/// Percent-encode a query-string component.
fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::encode_component;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(
            encode_component("money & markets?"),
            "money%20%26%20markets%3F"
        );
    }

    #[test]
    fn leaves_unreserved_characters_alone() {
        assert_eq!(encode_component("plain-slug_1.2~x"), "plain-slug_1.2~x");
    }
}
