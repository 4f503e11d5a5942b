use dioxus::prelude::*;

use crate::core::timing;

/// Canonical dashboard URL, used where no browser location exists
/// (desktop builds) and as the wasm fallback.
const SITE_URL: &str = "https://parkpulse.io";

const SHARE_TEXT: &str = "Discover how the 2016-2018 LOVE Park renovation affected visitor \
                          sentiment. Ratings dipped 2.5% during construction, then surged \
                          10.2% after reopening.";

/// Social intent links for the current page.
fn share_links(url: &str) -> Vec<(&'static str, String)> {
    let encoded = |pairs: &[(&str, &str)]| serde_urlencoded::to_string(pairs).unwrap_or_default();

    vec![
        (
            "Share on Twitter",
            format!(
                "https://twitter.com/intent/tweet?{}",
                encoded(&[("text", SHARE_TEXT), ("url", url)])
            ),
        ),
        (
            "Share on LinkedIn",
            format!(
                "https://www.linkedin.com/sharing/share-offsite/?{}",
                encoded(&[("url", url)])
            ),
        ),
        (
            "Share on Facebook",
            format!(
                "https://www.facebook.com/sharer/sharer.php?{}",
                encoded(&[("u", url)])
            ),
        ),
    ]
}

fn current_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_else(|| SITE_URL.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SITE_URL.to_string()
    }
}

fn open_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(err) = open::that(url) {
            tracing::error!("failed to open share link: {err}");
        }
    }
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

/// Floating share button with a pop-up panel of intent links plus a
/// copy-link action.
#[component]
pub fn ShareButton() -> Element {
    let mut open_panel = use_signal(|| false);
    let mut copied = use_signal(|| false);

    let copy_handler = move |_| {
        spawn(async move {
            match copy_to_clipboard(current_url()).await {
                Ok(()) => {
                    copied.set(true);
                    timing::sleep_ms(2000).await;
                    copied.set(false);
                }
                Err(err) => tracing::error!("copy link failed: {err}"),
            }
        });
    };

    rsx! {
        div { class: "share",
            if open_panel() {
                div { class: "share__panel",
                    for (label, url) in share_links(&current_url()) {
                        button {
                            r#type: "button",
                            class: "share__item",
                            onclick: move |_| open_url(&url),
                            "{label}"
                        }
                    }

                    div { class: "share__rule" }

                    button {
                        r#type: "button",
                        class: "share__item",
                        onclick: copy_handler,
                        if copied() { "Link copied ✓" } else { "Copy link" }
                    }
                }
            }

            button {
                r#type: "button",
                class: "share__toggle",
                aria_label: "Share this dashboard",
                onclick: move |_| open_panel.toggle(),
                "↗"
            }
        }
    }
}
