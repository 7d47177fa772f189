//! Template Card Component
//!
//! One gallery entry: thumbnail, title, author, creation date, description
//! and a single "View Template" action.

use dioxus::prelude::*;
use portal_core::{CardAction, PreviewFrame, TemplateDescriptor, EXTERNAL_REL, EXTERNAL_TARGET};

use crate::components::TemplatePreview;

/// Gallery card for one template descriptor
///
/// Templates with a detail view open in-app through `on_select`; the rest
/// link out to their preview URL in a new window.
#[component]
pub fn TemplateCard(
    descriptor: TemplateDescriptor,
    /// Geometry of the live thumbnail
    frame: PreviewFrame,
    /// Selection handler (receives the descriptor id)
    on_select: EventHandler<String>,
) -> Element {
    let card_id = descriptor.id.clone();
    let action = CardAction::for_descriptor(&descriptor);

    rsx! {
        article { class: "template-card",
            figure { class: "template-card__figure",
                if let Some(template) = descriptor.live_preview() {
                    TemplatePreview { template, frame }
                } else {
                    img {
                        class: "template-card__img",
                        src: "{descriptor.preview_image}",
                        alt: "Preview of the {descriptor.title} template",
                        loading: "lazy",
                    }
                }
            }

            div { class: "template-card__body",
                div {
                    h3 { class: "template-card__title", "{descriptor.title}" }
                    if let Some(variant) = &descriptor.variant_title {
                        p { class: "template-card__variant", "{variant}" }
                    }
                    p { class: "template-card__author", "Created by {descriptor.author}" }
                }

                time {
                    class: "template-card__date",
                    datetime: "{descriptor.created_at.iso}",
                    "{descriptor.created_at.label}"
                }

                p { class: "template-card__description", "{descriptor.description}" }

                div { class: "template-card__actions",
                    {match action {
                        CardAction::OpenDetail(_) => rsx! {
                            button {
                                class: "btn-view",
                                r#type: "button",
                                onclick: move |_| on_select.call(card_id.clone()),
                                "View Template"
                            }
                        },
                        CardAction::OpenExternal { url } => rsx! {
                            a {
                                class: "btn-view",
                                href: "{url}",
                                target: EXTERNAL_TARGET,
                                rel: EXTERNAL_REL,
                                onclick: move |_| on_select.call(card_id.clone()),
                                "View Template"
                            }
                        },
                    }}
                }
            }
        }
    }
}
