//! Search Bar
//!
//! The always-visible card search: text input plus search button. Enter in
//! the input triggers the same search as the button. Both are disabled
//! while a request is in flight.

use dioxus::prelude::*;

use tokensmith_core::Action;
use tokensmith_ui::{Button, SearchInput};

use crate::context::use_session;

/// Properties for the SearchBar component
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    /// Disabled while a request is outstanding
    #[props(default = false)]
    pub busy: bool,
    /// Handler invoked on button click or Enter
    pub on_search: EventHandler<()>,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut session = use_session();
    let query = session().query.clone();

    rsx! {
        section { class: "search-section",
            SearchInput {
                value: query,
                disabled: props.busy,
                oninput: move |value| {
                    session.set(session().apply(Action::SetQuery(value)));
                },
                onsubmit: move |_| props.on_search.call(()),
            }
            Button {
                disabled: props.busy,
                onclick: move |_| props.on_search.call(()),
                "Search"
            }
        }
    }
}
