//! Loading Overlay Component
//!
//! Shown for the duration of either network call and cleared on every
//! outcome (success, empty, failure).

use dioxus::prelude::*;

/// Properties for the LoadingOverlay component
#[derive(Clone, PartialEq, Props)]
pub struct LoadingOverlayProps {
    /// Whether the overlay is visible
    pub visible: bool,
    /// Message under the spinner
    #[props(default = "Working...".to_string())]
    pub label: String,
}

#[component]
pub fn LoadingOverlay(props: LoadingOverlayProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    rsx! {
        div { class: "loading-overlay", "aria-busy": "true",
            div { class: "loading-spinner" }
            p { class: "loading-label", "{props.label}" }
        }
    }
}
