//! Clipboard write strategy
//!
//! Two writers behind one trait: the async Clipboard API when the browser
//! exposes it, and a selection/`execCommand` fallback when it does not. The
//! capability probe runs once per call, so the choice tracks whatever the
//! environment looks like at the moment of the write.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// Places one string on the system clipboard.
#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Async Clipboard API (`navigator.clipboard.writeText`).
///
/// Suspends until the browser's promise settles; a permission denial
/// surfaces as an error for the caller's containment boundary.
pub struct PrimaryClipboardWriter;

/// Selection + `document.execCommand("copy")` fallback for browsers without
/// the async clipboard.
pub struct LegacyClipboardWriter;

/// Per-call dispatcher: uses the primary writer when `navigator.clipboard`
/// exists, the legacy writer otherwise.
pub struct BrowserClipboard;

#[cfg(target_arch = "wasm32")]
fn js_error(context: &str, value: JsValue) -> anyhow::Error {
    anyhow!("{context}: {value:?}")
}

#[async_trait(?Send)]
impl ClipboardWriter for PrimaryClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<()> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
            let clipboard = window.navigator().clipboard();
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| js_error("clipboard write rejected", e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = text;
            Err(anyhow!("clipboard is only available in the browser"))
        }
    }
}

#[async_trait(?Send)]
impl ClipboardWriter for LegacyClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<()> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
            let document = window.document().ok_or_else(|| anyhow!("no document"))?;
            let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;

            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .map_err(|e| js_error("create temporary input", e))?
                .dyn_into()
                .map_err(|_| anyhow!("created element is not an input"))?;
            input.set_value(text);
            // Selectable but out of view.
            let _ = input.set_attribute("style", "position:fixed;top:-100px;opacity:0");

            body.append_child(&input)
                .map_err(|e| js_error("attach temporary input", e))?;
            input.select();
            let copied = document.exec_command("copy");
            // The input goes away even when the command fails.
            input.remove();

            // The command's boolean result is not checked; only a thrown
            // error fails the write.
            copied
                .map(|_| ())
                .map_err(|e| js_error("execCommand copy", e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = text;
            Err(anyhow!("clipboard is only available in the browser"))
        }
    }
}

/// `true` when the browser exposes `navigator.clipboard`.
fn primary_available() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| !window.navigator().clipboard().is_undefined())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[async_trait(?Send)]
impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if primary_available() {
            PrimaryClipboardWriter.write_text(text).await
        } else {
            LegacyClipboardWriter.write_text(text).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingWriter {
        writes: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ClipboardWriter for RecordingWriter {
        async fn write_text(&self, text: &str) -> Result<()> {
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn writers_are_usable_behind_the_trait_object() {
        let recorder = RecordingWriter::default();
        let writer: &dyn ClipboardWriter = &recorder;
        block_on(writer.write_text("ABC123")).unwrap();
        assert_eq!(*recorder.writes.borrow(), vec!["ABC123".to_string()]);
    }

    #[test]
    fn browser_writers_fail_outside_the_browser() {
        assert!(block_on(PrimaryClipboardWriter.write_text("x")).is_err());
        assert!(block_on(LegacyClipboardWriter.write_text("x")).is_err());
        assert!(!primary_available());
    }
}
