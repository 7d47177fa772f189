//! Template detail - a full-bleed template with its own dismiss control.

use dioxus::prelude::*;
use portal_core::{DetailMode, NavEvent, TemplateId};

use crate::context::use_navigation;
use crate::templates::TemplateView;

/// Full-screen detail view for one template.
///
/// Dismissing returns to the gallery, never to the gate.
#[component]
pub fn TemplateDetailPage(template: TemplateId) -> Element {
    let mut nav = use_navigation();

    rsx! {
        TemplateView {
            template,
            mode: DetailMode::Full,
            on_back: move |_| {
                nav.write().dispatch(NavEvent::DismissDetail);
            },
        }
    }
}
