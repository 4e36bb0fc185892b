//! Newsletter signup strip shown at the bottom of every page.

use dioxus::prelude::*;

use crate::api::engage_api::subscribe_newsletter;

#[derive(Debug, Clone, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Done(String),
    Failed(String),
}

fn status_line(state: &SubmitState) -> Element {
    match state {
        SubmitState::Done(message) => rsx! {
            span { style: "font-size: 14px;", "{message}" }
        },
        SubmitState::Failed(message) => rsx! {
            span { style: "font-size: 14px; color: #FEE2E2;", "{message}" }
        },
        _ => rsx! {},
    }
}

#[component]
pub fn NewsletterSection() -> Element {
    let mut email = use_signal(|| "".to_string());
    let mut state = use_signal(|| SubmitState::Idle);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let address = email.read().clone();
        state.set(SubmitState::Sending);
        spawn(async move {
            match subscribe_newsletter(address).await {
                Ok(()) => {
                    email.set("".to_string());
                    state.set(SubmitState::Done(
                        "Thank you for subscribing!".to_string(),
                    ));
                }
                Err(err) => state.set(SubmitState::Failed(err.to_string())),
            }
        });
    };

    rsx! {
        section {
            style: "background-color: #0C8E61; color: white; padding: 64px 24px;",
            div {
                class: "site-layout",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 32px;
                    align-items: center;
                    justify-content: space-between;
                ",

                div {
                    style: "max-width: 480px; display: flex; flex-direction: column; gap: 10px;",
                    h2 {
                        style: "font-family: 'Cormorant Garamond', serif; font-size: 34px; font-weight: 700;",
                        "Stay in the loop"
                    }
                    p {
                        style: "font-size: 16px; color: rgba(255,255,255,0.9);",
                        "Get our latest research, data stories and policy updates in your inbox."
                    }
                }

                form {
                    style: "display: flex; flex-direction: column; gap: 10px; min-width: 300px;",
                    onsubmit: submit,
                    div {
                        style: "display: flex; flex-direction: row; gap: 10px;",
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: "Your email address",
                            value: "{email}",
                            style: "
                                flex: 1;
                                border: none;
                                outline: none;
                                border-radius: 9999px;
                                padding: 12px 20px;
                                font-size: 15px;
                                color: #111827;
                            ",
                            oninput: move |e| email.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            disabled: *state.read() == SubmitState::Sending,
                            style: "
                                background-color: #FEC90C;
                                color: #111827;
                                font-weight: 600;
                                border: none;
                                border-radius: 9999px;
                                padding: 12px 24px;
                                cursor: pointer;
                            ",
                            "Subscribe"
                        }
                    }

                    {status_line(&state.read())}
                }
            }
        }
    }
}
