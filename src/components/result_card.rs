//! Result Card
//!
//! One selectable entry in the search results: thumbnail, name, and the
//! "mana cost • type line" summary. A card with no usable image gets a
//! placeholder block instead of a broken img.

use dioxus::prelude::*;

use tokensmith_core::Card;

/// Properties for the ResultCard component
#[derive(Clone, PartialEq, Props)]
pub struct ResultCardProps {
    pub card: Card,
    /// Handler called with the card when the entry is clicked
    pub on_select: EventHandler<Card>,
}

#[component]
pub fn ResultCard(props: ResultCardProps) -> Element {
    let thumbnail = props.card.thumbnail().map(str::to_string);
    let name = props.card.name.clone();
    let summary = props.card.summary_line();

    let selected = props.card.clone();
    let on_select = props.on_select;

    rsx! {
        div {
            class: "result-card",
            role: "button",
            tabindex: "0",
            onclick: move |_| on_select.call(selected.clone()),
            if let Some(uri) = thumbnail {
                img {
                    class: "result-card__img",
                    src: "{uri}",
                    alt: "{name}",
                }
            } else {
                div { class: "result-card__img result-card__img--missing",
                    "no image"
                }
            }
            div { class: "result-card__info",
                h4 { class: "result-card__name", "{name}" }
                if !summary.is_empty() {
                    p { class: "result-card__line", "{summary}" }
                }
            }
        }
    }
}
