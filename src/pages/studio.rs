//! The Studio - the single token creator page.
//!
//! The search bar is always visible; exactly one of the results,
//! customization, and preview sections renders below it, derived from the
//! session's panel in the one `match` at the bottom of this component.

use dioxus::prelude::*;

use tokensmith_core::{Action, Notice, Panel, TokenError};

use crate::components::{CustomizeForm, ResultsList, SearchBar, TokenPreview};
use crate::context::{push_notice, use_api, use_busy, use_notices, use_session};

/// Main studio page component.
///
/// Owns the handlers for all five operations (search, select, generate,
/// download, reset); child components are presentational.
#[component]
pub fn Studio() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut busy = use_busy();
    let notices = use_notices();

    // Every error in the taxonomy lands here as a transient banner.
    let report = move |err: TokenError| {
        tracing::warn!("{}", err);
        push_notice(notices, Notice::error(err.to_string()));
    };

    // Search: validation happens inside the client, before any request.
    // The busy flag brackets the call and gates double submission.
    let run_search = move || {
        if busy() {
            return;
        }
        spawn(async move {
            busy.set(true);
            let client = api();
            let query = session.read().query.clone();
            match client.search(&query).await {
                Ok(found) => {
                    session.set(session().apply(Action::ResultsLoaded {
                        cards: found.cards,
                        total: found.total,
                    }));
                }
                Err(err) => report(err),
            }
            busy.set(false);
        });
    };

    // Generate: the precondition check runs before the spawn, so a missing
    // selection never issues a request.
    let run_generate = move || {
        if busy() {
            return;
        }
        let request = match session.read().token_request() {
            Ok(request) => request,
            Err(err) => {
                report(err);
                return;
            }
        };
        spawn(async move {
            busy.set(true);
            let client = api();
            match client.generate(&request).await {
                Ok(bytes) => {
                    session.set(session().apply(Action::TokenGenerated(bytes)));
                }
                Err(err) => report(err),
            }
            busy.set(false);
        });
    };

    // Download: save dialog seeded with the Downloads directory and the
    // timestamped filename, then an async write of the held bytes.
    let run_download = move || {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let download = match session.read().download(now_ms) {
            Ok(download) => download,
            Err(err) => {
                report(err);
                return;
            }
        };
        spawn(async move {
            let filename = download.filename.clone();
            // File dialog is blocking; keep it off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                let mut dialog = rfd::FileDialog::new()
                    .set_title("Save token")
                    .set_file_name(&filename);
                if let Some(dir) = dirs::download_dir() {
                    dialog = dialog.set_directory(dir);
                }
                dialog.save_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match tokio::fs::write(&path, &download.bytes).await {
                    Ok(()) => {
                        tracing::info!("Token saved to {:?}", path);
                        push_notice(
                            notices,
                            Notice::info(format!("Token saved to {}", path.display())),
                        );
                    }
                    Err(err) => report(TokenError::from(err)),
                },
                // User cancelled the dialog
                Ok(None) => {}
                Err(err) => {
                    push_notice(notices, Notice::error(format!("File dialog error: {:?}", err)));
                }
            }
        });
    };

    let run_reset = move || {
        session.set(session().apply(Action::Reset));
    };

    let current = session();

    // The one place panel state becomes a visible section; the other two
    // sections cannot render alongside it.
    let active_section = match current.panel {
        Panel::Search => rsx! {
            p { class: "studio-hint", "search for a card to begin" }
        },
        Panel::Results => rsx! {
            ResultsList {
                cards: current.results.clone(),
                total: current.total,
                on_select: move |card| {
                    session.set(session().apply(Action::Select(card)));
                },
            }
        },
        Panel::Customize => rsx! {
            if let Some(card) = current.selected.clone() {
                CustomizeForm {
                    card,
                    busy: busy(),
                    on_generate: move |_| run_generate(),
                }
            }
        },
        Panel::Preview => rsx! {
            if let Some(bytes) = current.generated.clone() {
                TokenPreview {
                    bytes,
                    on_download: move |_| run_download(),
                    on_new_token: move |_| run_reset(),
                }
            }
        },
    };

    rsx! {
        main { class: "studio",
            header { class: "studio-header",
                h1 { class: "page-title", "Tokensmith" }
                p { class: "tagline", "forge custom tokens from any card" }
            }

            SearchBar {
                busy: busy(),
                on_search: move |_| run_search(),
            }

            {active_section}
        }
    }
}
