//! Access page - the client code gate.
//!
//! The only way into the gallery. A valid code is echoed into the `code`
//! query parameter, the button shows "Submitting…" for the configured delay,
//! then the portal moves on to the gallery.

use dioxus::prelude::*;
use portal_core::{NavEvent, Transition, WRONG_CODE_MESSAGE};

use crate::context::{use_config, use_navigation};
use crate::hooks::use_scoped_timer;

const INPUT_ID: &str = "client-code";

/// Access form component.
#[component]
pub fn AccessPage() -> Element {
    let mut nav = use_navigation();
    let config = use_config();
    let timer = use_scoped_timer();

    let (code, submitting, can_submit, show_error) = {
        let nav = nav.read();
        (
            nav.state().code.clone(),
            nav.state().submitting,
            nav.can_submit(),
            nav.shows_code_error(),
        )
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let transition = nav.write().dispatch(NavEvent::SubmitCode);
        match transition {
            Transition::SubmitStarted { code } => {
                tracing::info!("Access code accepted ({} chars)", code.len());
                timer.schedule(config.gate_delay(), move || {
                    nav.write().dispatch(NavEvent::SubmissionSettled);
                });
            }
            Transition::Rejected => tracing::debug!("Access code rejected"),
            _ => {}
        }
    };

    let error_id = format!("{}-error", INPUT_ID);

    rsx! {
        div { class: "access-backdrop",
            div { class: "access-vignette" }

            main { class: "access-page",
                section { class: "access-panel",
                    header { class: "access-header",
                        h1 { class: "access-title", "Access Your Proposals" }
                        p { class: "access-lead",
                            "Enter your client code to view your curated templates."
                        }
                    }

                    form {
                        novalidate: true,
                        onsubmit: on_submit,

                        label { class: "field-label", r#for: INPUT_ID, "Client code" }
                        div { class: "access-row",
                            input {
                                id: INPUT_ID,
                                class: "text-input",
                                name: "clientCode",
                                r#type: "text",
                                autocomplete: "one-time-code",
                                placeholder: "e.g. ACME-2025",
                                value: "{code}",
                                disabled: submitting,
                                "aria-invalid": show_error,
                                "aria-describedby": if show_error { error_id.clone() } else { String::new() },
                                oninput: move |e| {
                                    nav.write().dispatch(NavEvent::CodeChanged(e.value()));
                                },
                            }
                            button {
                                class: "btn-primary",
                                r#type: "submit",
                                disabled: !can_submit,
                                if submitting { "Submitting…" } else { "Submit" }
                            }
                        }

                        if show_error {
                            p { id: "{error_id}", class: "field-error", "{WRONG_CODE_MESSAGE}" }
                        }
                    }

                    footer { class: "access-footer",
                        "You’ll only see templates tied to your code."
                    }
                }
            }
        }
    }
}
