//! Free-text search box that submits into the listing query.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

#[component]
pub fn SearchBox(initial: ReadSignal<String>, on_submit: Callback<String>) -> Element {
    let mut text = use_signal(|| initial.peek().clone());

    // the address bar is the source of truth; follow it when it changes
    use_effect(move || {
        let applied = initial.read().clone();
        text.set(applied);
    });

    rsx! {
        form {
            style: "position: relative; display: flex; align-items: center;",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit(text.read().clone());
            },
            input {
                r#type: "text",
                placeholder: "Search...",
                value: "{text}",
                style: "
                    padding: 9px 40px 9px 16px;
                    border-radius: 9999px;
                    border: 1px solid #D1D5DB;
                    font-size: 14px;
                    outline: none;
                    min-width: 220px;
                ",
                oninput: move |e| text.set(e.value()),
            }
            button {
                r#type: "submit",
                aria_label: "Search",
                style: "
                    position: absolute;
                    right: 10px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    display: flex;
                ",
                Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: #9CA3AF;" }
            }
        }
    }
}
