//! Notice Stack Component
//!
//! Fixed-position stack of transient banners in the top-right corner.
//! Banners never block interaction; each can be dismissed by hand and the
//! app layer removes it after the TTL anyway.

use dioxus::prelude::*;
use tokensmith_core::Notice;

use crate::components::IconButton;

/// Properties for the NoticeStack component
#[derive(Clone, PartialEq, Props)]
pub struct NoticeStackProps {
    /// Notices to display, oldest first
    pub notices: Vec<Notice>,
    /// Handler called with the notice id when its dismiss button is clicked
    pub on_dismiss: EventHandler<u64>,
}

/// Renders the stacked banners
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NoticeStack {
///         notices: notices(),
///         on_dismiss: move |id| notices.write().retain(|n| n.id != id),
///     }
/// }
/// ```
#[component]
pub fn NoticeStack(props: NoticeStackProps) -> Element {
    if props.notices.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notice-stack", role: "status", "aria-live": "polite",
            for notice in props.notices.iter() {
                {
                    let id = notice.id;
                    let on_dismiss = props.on_dismiss;
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{notice.level.class()}",
                            span { class: "notice-message", "{notice.message}" }
                            IconButton {
                                aria_label: "Dismiss".to_string(),
                                class: "notice-dismiss".to_string(),
                                onclick: move |_| on_dismiss.call(id),
                                "\u{00D7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
