//! Customize Form
//!
//! Power/toughness/subtype overrides plus the five color toggles for the
//! selected card. Empty fields are allowed; the service decides what to
//! compose. The color toggles stay client-side (see DESIGN.md).

use dioxus::prelude::*;

use tokensmith_core::{Action, Card};
use tokensmith_ui::{Button, ButtonVariant, ColorPills, Input};

use crate::context::use_session;

/// Properties for the CustomizeForm component
#[derive(Clone, PartialEq, Props)]
pub struct CustomizeFormProps {
    /// The selected card being turned into a token
    pub card: Card,
    /// Disabled while a generate request is in flight
    #[props(default = false)]
    pub busy: bool,
    /// Handler invoked by the generate button
    pub on_generate: EventHandler<()>,
}

#[component]
pub fn CustomizeForm(props: CustomizeFormProps) -> Element {
    let mut session = use_session();
    let current = session();

    let thumbnail = props.card.thumbnail().map(str::to_string);
    let summary = props.card.summary_line();

    rsx! {
        section { class: "customize-section",
            h2 { class: "section-header", "Customize your token" }

            div { class: "selected-card",
                if let Some(uri) = thumbnail {
                    img {
                        class: "selected-card__img",
                        src: "{uri}",
                        alt: "{props.card.name}",
                    }
                }
                div { class: "selected-card__info",
                    h3 { class: "selected-card__name", "{props.card.name}" }
                    if !summary.is_empty() {
                        p { class: "selected-card__line", "{summary}" }
                    }
                }
            }

            div { class: "customize-form",
                div { class: "form-row",
                    Input {
                        label: "power".to_string(),
                        hint: "optional".to_string(),
                        placeholder: "e.g. 1".to_string(),
                        value: current.power.clone(),
                        disabled: props.busy,
                        oninput: move |value| {
                            session.set(session().apply(Action::SetPower(value)));
                        },
                    }
                    Input {
                        label: "toughness".to_string(),
                        hint: "optional".to_string(),
                        placeholder: "e.g. 1".to_string(),
                        value: current.toughness.clone(),
                        disabled: props.busy,
                        oninput: move |value| {
                            session.set(session().apply(Action::SetToughness(value)));
                        },
                    }
                }

                Input {
                    label: "subtype".to_string(),
                    hint: "optional".to_string(),
                    placeholder: "e.g. Soldier".to_string(),
                    value: current.subtype.clone(),
                    disabled: props.busy,
                    oninput: move |value| {
                        session.set(session().apply(Action::SetSubtype(value)));
                    },
                }

                div { class: "form-field",
                    label { class: "input-label", "colors" }
                    ColorPills {
                        selected: current.colors.clone(),
                        disabled: props.busy,
                        on_toggle: move |color| {
                            session.set(session().apply(Action::ToggleColor(color)));
                        },
                    }
                }

                Button {
                    variant: ButtonVariant::Accent,
                    disabled: props.busy,
                    onclick: move |_| props.on_generate.call(()),
                    if props.busy {
                        "Generating..."
                    } else {
                        "Generate Token"
                    }
                }
            }
        }
    }
}
