//! Input Field Components
//!
//! Text inputs for the customization form and the search bar.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text beside the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut power = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: power(),
///         oninput: move |s| power.set(s),
///         label: "power".to_string(),
///         hint: "optional".to_string(),
///         placeholder: "e.g. 1".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Search input with icon and Enter-to-submit
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search text changes
    pub oninput: EventHandler<String>,
    /// Handler called when Enter is pressed
    pub onsubmit: EventHandler<()>,
    /// Whether the input is disabled (while a search is in flight)
    #[props(default = false)]
    pub disabled: bool,
    /// Placeholder text
    #[props(default = "search for a card by name...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.onsubmit.call(());
                    }
                },
            }
        }
    }
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}
