//! Pagination controls: prev/next arrows plus the collapsed page window.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};

use common::page_window::{PageWindowItem, compute_page_window};

#[component]
pub fn PaginationControls(
    current_page: u64,
    total_pages: u64,
    on_navigate: Callback<u64>,
) -> Element {
    // the shown page never exceeds the real page count
    let shown_page = current_page.min(total_pages.max(1));
    let window = compute_page_window(shown_page, total_pages);
    if window.is_empty() {
        return rsx! {};
    }

    let at_first = shown_page <= 1;
    let at_last = shown_page >= total_pages;

    let slots: Vec<Element> = window.iter().enumerate().map(|(slot, item)| match *item {
        PageWindowItem::Page(page) => {
            let is_current = page == shown_page;
            let style = if is_current {
                "width: 34px; height: 34px; border: none; border-radius: 8px; background-color: #0C8E61; color: white; font-weight: 600; cursor: default;"
            } else {
                "width: 34px; height: 34px; border: none; border-radius: 8px; background: none; color: #4B5563; cursor: pointer;"
            };
            rsx! {
                button {
                    key: "page-{page}",
                    disabled: is_current,
                    style: style,
                    onclick: move |_| on_navigate(page),
                    "{page}"
                }
            }
        }
        PageWindowItem::Ellipsis => rsx! {
            span {
                key: "ellipsis-{slot}",
                aria_hidden: "true",
                style: "color: #9CA3AF; padding: 0 4px;",
                "..."
            }
        },
    }).collect();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                justify-content: center;
                align-items: center;
                gap: 8px;
                margin-top: 48px;
            ",

            ArrowButton {
                label: "Previous page",
                disabled: at_first,
                onclick: move |_| on_navigate(shown_page - 1),
                Icon { icon: MdChevronLeft, style: "width: 20px; height: 20px; color: #4B5563;" }
            }

            {slots.into_iter()}

            ArrowButton {
                label: "Next page",
                disabled: at_last,
                onclick: move |_| on_navigate(shown_page + 1),
                Icon { icon: MdChevronRight, style: "width: 20px; height: 20px; color: #4B5563;" }
            }
        }
    }
}

/// Boundary arrows render even when inert, just muted and non-navigable.
#[component]
fn ArrowButton(
    label: String,
    disabled: bool,
    onclick: Callback<()>,
    children: Element,
) -> Element {
    let style = if disabled {
        "padding: 8px; border: none; border-radius: 8px; background: none; opacity: 0.4; cursor: default;"
    } else {
        "padding: 8px; border: none; border-radius: 8px; background: none; cursor: pointer;"
    };

    rsx! {
        button {
            aria_label: "{label}",
            aria_disabled: disabled,
            disabled: disabled,
            style: style,
            onclick: move |_| {
                if !disabled {
                    onclick(());
                }
            },
            {children}
        }
    }
}
