//! Contact Form Component
//!
//! Uncontrolled fields; nothing is sent anywhere. The owning view decides
//! what a submission does and passes the resulting status back in.

use dioxus::prelude::*;

use crate::templates::content::ContactCopy;

/// Lead form with name, email, city, interest and message fields
#[component]
pub fn ContactForm(
    copy: &'static ContactCopy,
    /// Submission in flight; disables the button
    sending: bool,
    /// Show the confirmation banner
    sent: bool,
    on_submit: EventHandler<()>,
) -> Element {
    let default_interest = copy.interests.first().map(|i| i.value).unwrap_or_default();

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(());
            },

            input {
                class: "site-input",
                name: "name",
                required: true,
                placeholder: copy.name_placeholder,
            }
            input {
                class: "site-input",
                name: "email",
                r#type: "email",
                required: true,
                placeholder: copy.email_placeholder,
            }
            input {
                class: "site-input",
                name: "city",
                placeholder: copy.city_placeholder,
            }
            select {
                class: "site-input",
                name: "interest",
                value: default_interest,
                for interest in copy.interests.iter() {
                    option { key: "{interest.value}", value: interest.value, "{interest.label}" }
                }
            }
            textarea {
                class: "site-input contact-form__wide",
                name: "message",
                rows: "4",
                placeholder: copy.message_placeholder,
            }

            div { class: "contact-form__wide contact-form__actions",
                button {
                    class: "site-button site-button--primary",
                    r#type: "submit",
                    disabled: sending,
                    if sending { "{copy.sending_label}" } else { "{copy.submit_label}" }
                }
                span { class: "contact-form__note", "{copy.note}" }
            }

            if sent {
                div { class: "contact-form__wide contact-form__sent", role: "status", "{copy.thanks}" }
            }
        }
    }
}
