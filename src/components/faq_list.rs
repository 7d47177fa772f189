//! FAQ accordion. The owning view holds which entry is open.

use dioxus::prelude::*;

use crate::templates::content::FaqItem;

/// Accordion of questions where at most one answer is visible
#[component]
pub fn FaqList(
    items: &'static [FaqItem],
    /// Id of the expanded entry, if any
    open: Option<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "faq-grid",
            for item in items.iter() {
                {
                    let is_open = open.as_deref() == Some(item.id);
                    let id = item.id;
                    rsx! {
                        div { key: "{item.id}", class: "site-card faq-item",
                            button {
                                class: "faq-item__question",
                                r#type: "button",
                                "aria-expanded": is_open,
                                onclick: move |_| on_toggle.call(id.to_string()),
                                span { "{item.question}" }
                                span {
                                    class: if is_open { "faq-item__chevron faq-item__chevron--open" } else { "faq-item__chevron" },
                                    "⌄"
                                }
                            }
                            if is_open {
                                p { class: "faq-item__answer", "{item.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
