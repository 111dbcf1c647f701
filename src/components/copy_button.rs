//! Copy trigger buttons
//!
//! Each registered trigger renders one button. An activation resolves the
//! trigger's text, writes it to the clipboard and shows the acknowledgment
//! toast. Failures never leave the handler; they go to the console log.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::icons::{CheckIcon, CopyIcon, LinkIcon};
use crate::components::toast;
use crate::utils::clipboard::{BrowserClipboard, ClipboardWriter};
use crate::utils::copy_request::{self, CopyTrigger};

/// How long the per-button check mark stays before reverting.
const COPIED_REVERT_MS: u32 = 2000;

/// What one activation did. Failures stay invisible to the user; the
/// outcome records which silent path was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The trigger resolved to no text; nothing was attempted.
    Skipped,
    /// The write failed; the error went to the console log.
    Failed,
}

/// One activation: resolve the trigger and write its text to the clipboard.
/// Errors are contained here; callers only see the outcome.
pub async fn process_trigger<W: ClipboardWriter + ?Sized>(
    trigger: &CopyTrigger,
    page_url: Option<String>,
    writer: &W,
) -> CopyOutcome {
    let Some(text) = copy_request::resolve(trigger, page_url) else {
        return CopyOutcome::Skipped;
    };

    match writer.write_text(&text).await {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            log::error!("Failed to copy to clipboard: {e:?}");
            CopyOutcome::Failed
        }
    }
}

/// Share button for a single registered trigger.
#[component]
pub fn CopyButton(trigger: CopyTrigger) -> Element {
    let toast = toast::try_toast();
    let mut copied = use_signal(|| false);

    let shares_page_url = trigger.use_page_url;
    let label = trigger.label.clone();

    rsx! {
        button {
            class: "inline-flex items-center gap-2 px-3 py-1.5 text-sm border border-border rounded-lg hover:bg-accent transition-colors",
            onclick: move |_| {
                let trigger = trigger.clone();
                spawn(async move {
                    let outcome = process_trigger(
                        &trigger,
                        copy_request::current_page_url(),
                        &BrowserClipboard,
                    )
                    .await;

                    if outcome == CopyOutcome::Copied {
                        toast::acknowledge(toast, "Copied to clipboard");
                        copied.set(true);
                        spawn(async move {
                            TimeoutFuture::new(COPIED_REVERT_MS).await;
                            copied.set(false);
                        });
                    }
                });
            },
            if *copied.read() {
                CheckIcon { class: "w-4 h-4" }
            } else if shares_page_url {
                LinkIcon { class: "w-4 h-4" }
            } else {
                CopyIcon { class: "w-4 h-4" }
            }
            span {
                "{label}"
            }
        }
    }
}

/// Renders the registered triggers for a view. Registration happens once
/// per view build; an empty set renders nothing.
#[component]
pub fn CopyTriggerBar(triggers: Vec<CopyTrigger>) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap items-center gap-2",
            for trigger in triggers {
                CopyButton { key: "{trigger.label}", trigger: trigger.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
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

    struct DeniedWriter;

    #[async_trait(?Send)]
    impl ClipboardWriter for DeniedWriter {
        async fn write_text(&self, _text: &str) -> Result<()> {
            Err(anyhow!("write to clipboard was denied"))
        }
    }

    #[test]
    fn literal_text_reaches_the_writer() {
        let writer = RecordingWriter::default();
        let trigger = CopyTrigger::literal("Copy reference", "ABC123");

        let outcome = block_on(process_trigger(&trigger, None, &writer));

        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(*writer.writes.borrow(), vec!["ABC123".to_string()]);
    }

    #[test]
    fn page_url_reaches_the_writer_over_any_literal() {
        let writer = RecordingWriter::default();
        let mut trigger = CopyTrigger::page_url("Copy link");
        trigger.text = "ignored".to_string();

        let outcome = block_on(process_trigger(
            &trigger,
            Some("https://example.org/case/42".to_string()),
            &writer,
        ));

        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(
            *writer.writes.borrow(),
            vec!["https://example.org/case/42".to_string()]
        );
    }

    #[test]
    fn empty_trigger_makes_no_write_attempt() {
        let writer = RecordingWriter::default();
        let trigger = CopyTrigger::literal("Copy", "");

        let outcome = block_on(process_trigger(&trigger, None, &writer));

        assert_eq!(outcome, CopyOutcome::Skipped);
        assert!(writer.writes.borrow().is_empty());
    }

    #[test]
    fn denied_write_is_contained_as_failed() {
        let trigger = CopyTrigger::literal("Copy reference", "ABC123");

        let outcome = block_on(process_trigger(&trigger, None, &DeniedWriter));

        assert_eq!(outcome, CopyOutcome::Failed);
    }
}
