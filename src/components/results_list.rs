//! Results List
//!
//! The search results section: one selectable entry per returned card plus
//! a "showing N of M" count line, since the service caps how many matches
//! it returns.

use dioxus::prelude::*;

use tokensmith_core::Card;

use crate::components::ResultCard;

/// Properties for the ResultsList component
#[derive(Clone, PartialEq, Props)]
pub struct ResultsListProps {
    /// Cards to render, in server order
    pub cards: Vec<Card>,
    /// Total matches reported by the service
    pub total: u64,
    /// Handler called with the clicked card
    pub on_select: EventHandler<Card>,
}

#[component]
pub fn ResultsList(props: ResultsListProps) -> Element {
    let shown = props.cards.len();

    rsx! {
        section { class: "results-section",
            h2 { class: "section-header", "Select a card" }
            p { class: "results-count",
                "showing {shown} of {props.total} matching cards"
            }
            div { class: "results-grid",
                for (index, card) in props.cards.iter().enumerate() {
                    ResultCard {
                        key: "{index}-{card.name}",
                        card: card.clone(),
                        on_select: move |card| props.on_select.call(card),
                    }
                }
            }
        }
    }
}
