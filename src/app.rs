use dioxus::prelude::*;

use tokensmith_core::{ApiClient, Notice, Session};
use tokensmith_ui::{LoadingOverlay, NoticeStack};

use crate::pages::Studio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the shared context: the API client, the
/// session value, the in-flight flag, and the notice stack. The studio is
/// a single page; which section it shows is session state, not a route.
#[component]
pub fn App() -> Element {
    let api: Signal<ApiClient> = use_signal(|| ApiClient::new(crate::get_api_config()));
    let session: Signal<Session> = use_signal(Session::default);
    let busy: Signal<bool> = use_signal(|| false);
    let mut notices: Signal<Vec<Notice>> = use_signal(Vec::new);

    use_context_provider(|| api);
    use_context_provider(|| session);
    use_context_provider(|| busy);
    use_context_provider(|| notices);

    rsx! {
        style { {GLOBAL_STYLES} }
        Studio {}
        NoticeStack {
            notices: notices(),
            on_dismiss: move |id| notices.write().retain(|n: &Notice| n.id != id),
        }
        LoadingOverlay {
            visible: busy(),
            label: "Working its magic...".to_string(),
        }
    }
}
