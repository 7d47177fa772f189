use dioxus::prelude::*;
use portal_core::View;

use crate::context::{get_startup, Startup};
use crate::pages::{AccessPage, GalleryPage, TemplateDetailPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and hands the startup state to the portal.
#[component]
pub fn App() -> Element {
    let Some(startup) = get_startup() else {
        tracing::error!("Portal launched without startup state");
        return rsx! {
            style { {GLOBAL_STYLES} }
            main { class: "startup-error",
                p { "The portal is not configured." }
            }
        };
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        Portal { startup }
    }
}

/// Renders exactly one of the gate, the gallery or a detail view.
///
/// Owns the navigation controller; every page reports user intent back
/// through it.
#[component]
fn Portal(startup: Startup) -> Element {
    let Startup { config, controller } = startup;
    use_context_provider(|| config);
    let nav = use_signal(|| controller);
    use_context_provider(|| nav);

    let view = nav.read().current_view();

    rsx! {
        {match view {
            View::Gate => rsx! { AccessPage {} },
            View::Gallery => rsx! { GalleryPage {} },
            View::Detail(template) => rsx! {
                TemplateDetailPage { key: "{template}", template }
            },
        }}
    }
}
