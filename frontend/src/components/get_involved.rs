//! Get-involved section and its modal form.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::engage::{INTEREST_OPTIONS, InterestSubmission};

use crate::api::engage_api::record_interest;

const WAYS_TO_HELP: &[(&str, &str)] = &[
    ("Partner with us", "Work with us on advocacy campaigns and community programmes."),
    ("Fund the mission", "Back research and initiatives that remove barriers to inclusion."),
    ("Volunteer", "Lend your time and expertise to communities that need it most."),
];

#[component]
pub fn GetInvolvedSection() -> Element {
    let mut modal_open = use_signal(|| false);

    rsx! {
        section {
            style: "padding: 80px 24px;",
            div {
                class: "site-layout",
                h2 {
                    style: "
                        font-family: 'Cormorant Garamond', serif;
                        font-size: 40px;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 40px;
                    ",
                    "Get Involved"
                }
                div {
                    class: "card-grid",
                    for (title, body) in WAYS_TO_HELP.iter() {
                        div {
                            key: "{title}",
                            style: "
                                background-color: #F9FAFB;
                                border: 1px solid #E5E7EB;
                                border-radius: 16px;
                                padding: 28px;
                                display: flex;
                                flex-direction: column;
                                gap: 12px;
                            ",
                            h3 { style: "font-size: 20px; font-weight: 600; color: #111827;", "{title}" }
                            p { style: "font-size: 15px; color: #4B5563; line-height: 1.6;", "{body}" }
                        }
                    }
                }
                div {
                    style: "display: flex; justify-content: center; margin-top: 40px;",
                    button {
                        style: "
                            background-color: #0C8E61;
                            color: white;
                            font-weight: 600;
                            font-size: 16px;
                            border: none;
                            border-radius: 9999px;
                            padding: 14px 32px;
                            cursor: pointer;
                        ",
                        onclick: move |_| modal_open.set(true),
                        "Join the Initiative"
                    }
                }
            }

            if *modal_open.read() {
                GetInvolvedModal {
                    on_close: Callback::new(move |()| modal_open.set(false)),
                }
            }
        }
    }
}

#[component]
fn GetInvolvedModal(on_close: Callback<()>) -> Element {
    let mut name = use_signal(|| "".to_string());
    let mut email = use_signal(|| "".to_string());
    let mut interest = use_signal(|| "".to_string());
    let mut message = use_signal(|| "".to_string());
    let mut is_submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<Result<String, String>>);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let submission = InterestSubmission {
            name: name.read().clone(),
            email: email.read().clone(),
            interest: interest.read().clone(),
            message: message.read().clone(),
        };
        is_submitting.set(true);
        status.set(None);
        spawn(async move {
            let result = record_interest(submission).await;
            is_submitting.set(false);
            match result {
                Ok(()) => {
                    name.set("".to_string());
                    email.set("".to_string());
                    interest.set("".to_string());
                    message.set("".to_string());
                    status.set(Some(Ok(
                        "Thank you for your interest! We will get back to you soon.".to_string(),
                    )));
                    // leave the confirmation up briefly, then close
                    TimeoutFuture::new(3_000).await;
                    on_close(());
                }
                Err(err) => status.set(Some(Err(err.to_string()))),
            }
        });
    };

    rsx! {
        // backdrop closes the modal
        div {
            style: "
                position: fixed;
                inset: 0;
                background-color: rgba(0,0,0,0.5);
                z-index: 900;
            ",
            onclick: move |_| on_close(()),
        }
        div {
            style: "
                position: fixed;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                z-index: 901;
                background-color: white;
                border-radius: 16px;
                padding: 32px;
                width: min(520px, calc(100vw - 32px));
                max-height: calc(100vh - 64px);
                overflow-y: auto;
            ",

            h2 {
                style: "font-size: 24px; font-weight: 700; color: #111827; margin-bottom: 20px;",
                "Join the Initiative"
            }

            form {
                style: "display: flex; flex-direction: column; gap: 16px;",
                onsubmit: submit,

                ModalField { label: "Name",
                    input {
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        class: "modal-input",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                ModalField { label: "Email",
                    input {
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        class: "modal-input",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                ModalField { label: "Interest",
                    select {
                        class: "modal-input",
                        value: "{interest}",
                        onchange: move |e| interest.set(e.value()),
                        for (value, label) in INTEREST_OPTIONS.iter() {
                            option { key: "{label}", value: "{value}", "{label}" }
                        }
                    }
                }
                ModalField { label: "Message",
                    textarea {
                        rows: 4,
                        value: "{message}",
                        class: "modal-input",
                        oninput: move |e| message.set(e.value()),
                    }
                }

                {status_line(&status.read())}

                div {
                    style: "display: flex; flex-direction: row; gap: 12px; justify-content: flex-end;",
                    button {
                        r#type: "button",
                        style: "
                            background: white;
                            color: #374151;
                            border: 1px solid #D1D5DB;
                            border-radius: 9999px;
                            padding: 10px 22px;
                            cursor: pointer;
                        ",
                        onclick: move |_| on_close(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        disabled: *is_submitting.read(),
                        style: "
                            background-color: #0C8E61;
                            color: white;
                            font-weight: 600;
                            border: none;
                            border-radius: 9999px;
                            padding: 10px 22px;
                            cursor: pointer;
                        ",
                        if *is_submitting.read() { "Sending..." } else { "Submit" }
                    }
                }
            }
        }
    }
}

fn status_line(status: &Option<Result<String, String>>) -> Element {
    match status {
        Some(Ok(text)) => rsx! {
            div { style: "color: #047857; font-size: 14px;", "{text}" }
        },
        Some(Err(text)) => rsx! {
            div { style: "color: #B91C1C; font-size: 14px;", "{text}" }
        },
        None => rsx! {},
    }
}

#[component]
fn ModalField(label: String, children: Element) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; font-weight: 500; color: #374151;",
            "{label}"
            {children}
        }
    }
}
