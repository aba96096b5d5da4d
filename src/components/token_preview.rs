//! Token Preview
//!
//! Displays the generated token image from an in-memory data URI and
//! offers the download and start-over actions. The data URI lives only as
//! long as the preview renders; reset drops the bytes with the session.

use base64::Engine;
use dioxus::prelude::*;

use tokensmith_core::Bytes;
use tokensmith_ui::{Button, ButtonVariant};

/// Properties for the TokenPreview component
#[derive(Clone, PartialEq, Props)]
pub struct TokenPreviewProps {
    /// The generated PNG bytes
    pub bytes: Bytes,
    /// Handler for the download button
    pub on_download: EventHandler<()>,
    /// Handler for the "create another token" button
    pub on_new_token: EventHandler<()>,
}

#[component]
pub fn TokenPreview(props: TokenPreviewProps) -> Element {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&props.bytes);
    let data_uri = format!("data:image/png;base64,{}", encoded);

    // Pixel dimensions for the caption; skipped when the bytes don't
    // decode as an image
    let dimensions = image::load_from_memory(&props.bytes)
        .ok()
        .map(|img| format!("{} × {} px", img.width(), img.height()));

    rsx! {
        section { class: "preview-section",
            h2 { class: "section-header", "Your token" }

            img {
                class: "token-image",
                src: "{data_uri}",
                alt: "Generated token",
            }
            if let Some(dims) = dimensions {
                p { class: "token-dimensions", "{dims}" }
            }

            div { class: "preview-actions",
                Button {
                    variant: ButtonVariant::Accent,
                    onclick: move |_| props.on_download.call(()),
                    "Download PNG"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| props.on_new_token.call(()),
                    "Create Another Token"
                }
            }
        }
    }
}
