//! Color Pills Component
//!
//! The five mana color toggles on the customization form. Multi-select:
//! each pill flips independently. The selection never joins the generate
//! payload; it is cleared on reset with the rest of the form.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use tokensmith_core::Color;

/// Properties for the ColorPills component
#[derive(Clone, PartialEq, Props)]
pub struct ColorPillsProps {
    /// Currently toggled colors
    pub selected: BTreeSet<Color>,
    /// Handler called when a pill is toggled
    pub on_toggle: EventHandler<Color>,
    /// Whether the pills are disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Displays the five color pills as a toggle group
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ColorPills {
///         selected: session().colors.clone(),
///         on_toggle: move |color| dispatch(Action::ToggleColor(color)),
///     }
/// }
/// ```
#[component]
pub fn ColorPills(props: ColorPillsProps) -> Element {
    rsx! {
        div {
            class: "color-pills",
            role: "group",
            "aria-label": "Token colors",
            for color in Color::all() {
                {
                    let color = *color;
                    let is_selected = props.selected.contains(&color);
                    let on_toggle = props.on_toggle;
                    let pill_class = format!(
                        "pill pill--{}{}",
                        color.letter().to_lowercase(),
                        if is_selected { " selected" } else { "" },
                    );
                    rsx! {
                        button {
                            key: "{color.letter()}",
                            class: "{pill_class}",
                            r#type: "button",
                            disabled: props.disabled,
                            "aria-pressed": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_toggle.call(color),
                            span { class: "pill-letter", "{color.letter()}" }
                            " {color.label()}"
                        }
                    }
                }
            }
        }
    }
}
