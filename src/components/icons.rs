//! Line icons used across the templates.

use dioxus::prelude::*;

/// Available icon glyphs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Mic,
    Users,
    Star,
    Check,
    ArrowLeft,
    ArrowRight,
}

/// Stroke icon on a 24x24 grid.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     IconGlyph { icon: Icon::Mic, class: "brand-mark__icon" }
/// }
/// ```
#[component]
pub fn IconGlyph(
    icon: Icon,
    /// Additional CSS classes
    #[props(default)]
    class: String,
) -> Element {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {}", class)
    };

    rsx! {
        svg {
            class: "{class}",
            "aria-hidden": "true",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",

            {match icon {
                Icon::Mic => rsx! {
                    path { d: "M12 2a3 3 0 0 0-3 3v6a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z" }
                    path { d: "M19 10a7 7 0 0 1-14 0" }
                    path { d: "M12 17v5" }
                    path { d: "M8 22h8" }
                },
                Icon::Users => rsx! {
                    path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                    circle { cx: "9", cy: "7", r: "3" }
                    path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                    path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
                },
                Icon::Star => rsx! {
                    path { d: "M12 3 14.09 8.26 20 9.27l-4.5 4.39 1.06 6.18L12 17.77l-4.56 2.07L8.5 13.66 4 9.27l5.91-1.01L12 3Z" }
                },
                Icon::Check => rsx! {
                    circle { cx: "12", cy: "12", r: "9" }
                    path { d: "m9 12 2 2 4-4" }
                },
                Icon::ArrowLeft => rsx! {
                    path { d: "M14 7l-5 5 5 5" }
                    path { d: "M9.5 12H19" }
                },
                Icon::ArrowRight => rsx! {
                    path { d: "M10 7l5 5-5 5" }
                    path { d: "M14.5 12H5" }
                },
            }}
        }
    }
}
