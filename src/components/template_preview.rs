//! Template Preview Component
//!
//! Live miniature of a template: the full page, scaled down inside a clipping
//! viewport with a fade along the bottom edge.

use dioxus::prelude::*;
use portal_core::{PreviewFrame, TemplateId};

use crate::templates::TemplateView;

/// Scaled, non-interactive mirror of a template's detail view
///
/// # Examples
///
/// ```rust
/// rsx! {
///     TemplatePreview {
///         template: TemplateId::VoicesOnStage,
///         frame: PreviewFrame::default(),
///     }
/// }
/// ```
#[component]
pub fn TemplatePreview(
    /// Template to mirror
    template: TemplateId,
    /// Viewport geometry
    frame: PreviewFrame,
) -> Element {
    rsx! {
        div {
            class: "template-preview",
            style: "{frame.viewport_style()}",
            "aria-hidden": "true",

            div {
                class: "template-preview__content",
                style: "{frame.content_style()}",
                TemplateView {
                    template,
                    mode: frame.detail_mode(),
                    on_back: move |_| {},
                }
            }

            div {
                class: "template-preview__fade",
                style: "{frame.fade_style()}",
            }
        }
    }
}
