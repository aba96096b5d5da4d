//! Shared context for the token studio.
//!
//! The App component provides the API client, the session value, the
//! in-flight flag, and the notice stack; pages and components read them
//! back through these hooks.

use dioxus::prelude::*;
use tokensmith_core::{ApiClient, Notice, Session, NOTICE_TTL};

/// Hook to access the API client from context.
///
/// The client is cheap to clone; grab a copy before awaiting so no signal
/// borrow is held across a suspension point.
pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

/// Hook to access the session state from context.
///
/// The session is replaced wholesale on every transition; see
/// [`tokensmith_core::Session::apply`].
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Hook to access the in-flight request flag.
///
/// Set for the whole duration of a search or generate call; the triggering
/// controls are disabled while it holds.
pub fn use_busy() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the notice stack from context.
pub fn use_notices() -> Signal<Vec<Notice>> {
    use_context::<Signal<Vec<Notice>>>()
}

/// Push a notice and schedule its removal after [`NOTICE_TTL`].
///
/// Notices stack; removal is by id, so dismissing one never takes a newer
/// one with it.
pub fn push_notice(mut notices: Signal<Vec<Notice>>, notice: Notice) {
    let id = notice.id;
    notices.write().push(notice);
    spawn(async move {
        tokio::time::sleep(NOTICE_TTL).await;
        notices.write().retain(|n| n.id != id);
    });
}
