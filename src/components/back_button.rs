//! Back Button Component

use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};

/// Floating "Go Back" control pinned to the top-left corner
#[component]
pub fn BackButton(
    /// Button text
    #[props(default = "Go Back".to_string())]
    label: String,
    /// Click handler
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "back-button",
            r#type: "button",
            onclick: move |_| on_back.call(()),
            IconGlyph { icon: Icon::ArrowLeft, class: "back-button__icon" }
            "{label}"
        }
    }
}
