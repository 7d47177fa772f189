//! Gallery - every registered template as a card with a live miniature.

use dioxus::prelude::*;
use portal_core::{NavEvent, Transition};

use crate::components::{BackButton, TemplateCard};
use crate::context::{use_config, use_navigation};

/// Template gallery page.
#[component]
pub fn GalleryPage() -> Element {
    let mut nav = use_navigation();
    let config = use_config();

    let registry = nav.read().registry().clone();
    let grid_class = registry.columns().class();

    let select = move |card_id: String| {
        let transition = nav.write().dispatch(NavEvent::SelectTemplate(card_id));
        if let Transition::OpenExternal { url } = transition {
            // The card's anchor opens the URL; nothing else to do here
            tracing::debug!("External template link followed: {}", url);
        }
    };

    rsx! {
        main { class: "gallery-page",
            BackButton {
                label: "Go Back",
                on_back: move |_| {
                    nav.write().dispatch(NavEvent::GoBack);
                },
            }

            section { class: "gallery-panel",
                header { class: "gallery-header",
                    h2 { class: "gallery-title", "{config.site_heading}" }
                }

                div { class: "{grid_class}",
                    for descriptor in registry.iter() {
                        TemplateCard {
                            key: "{descriptor.id}",
                            descriptor: descriptor.clone(),
                            frame: config.preview,
                            on_select: select,
                        }
                    }
                }
            }
        }
    }
}
