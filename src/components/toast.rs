//! Acknowledgment toast
//!
//! A single reusable toast element confirms successful copies. Re-showing
//! while visible restarts the dismiss window on the same element, so rapid
//! activations never stack notifications.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Well-known id of the notification element.
pub const TOAST_ELEMENT_ID: &str = "copy-toast";

/// Auto-dismiss delay for the acknowledgment.
pub const DISMISS_MS: u32 = 1500;

/// Toast state. The generation counter ties each dismiss timer to the show
/// that started it, so a stale timer never clears a newer acknowledgment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AckToast {
    message: Option<String>,
    generation: u64,
}

impl AckToast {
    /// Show `message`, returning the generation that owns the dismiss window.
    pub fn begin(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Dismiss, unless a newer `begin` restarted the window.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Context handle dispensed by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct ToastHandle {
    state: Signal<AckToast>,
}

impl ToastHandle {
    /// Display the acknowledgment, restarting the dismiss window if one is
    /// already on screen.
    pub fn show(self, message: &str) {
        let mut state = self.state;
        let generation = state.write().begin(message);
        spawn(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            state.write().expire(generation);
        });
    }
}

/// The mounted toast handle, when a [`ToastProvider`] is above this
/// component. `None` means acknowledgments are skipped.
pub fn try_toast() -> Option<ToastHandle> {
    try_consume_context::<ToastHandle>()
}

/// Show the acknowledgment if toast infrastructure is mounted; otherwise do
/// nothing.
pub fn acknowledge(handle: Option<ToastHandle>, message: &str) {
    if let Some(handle) = handle {
        handle.show(message);
    }
}

/// Provides the toast context and renders the single notification element.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let state = use_signal(AckToast::default);
    use_context_provider(|| ToastHandle { state });

    let message = state.read().message().map(str::to_string);

    rsx! {
        {children}
        if let Some(message) = message {
            div {
                id: TOAST_ELEMENT_ID,
                class: "fixed bottom-6 left-1/2 -translate-x-1/2 px-4 py-2 rounded-lg bg-gray-900 text-white text-sm shadow-lg z-50",
                "{message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_shows_message() {
        let mut toast = AckToast::default();
        toast.begin("Copied to clipboard");
        assert_eq!(toast.message(), Some("Copied to clipboard"));
    }

    #[test]
    fn expire_dismisses_its_own_show() {
        let mut toast = AckToast::default();
        let generation = toast.begin("Copied to clipboard");
        toast.expire(generation);
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn stale_timer_does_not_dismiss_newer_show() {
        let mut toast = AckToast::default();
        let first = toast.begin("Copied to clipboard");
        let second = toast.begin("Copied to clipboard");

        // The first show's timer fires after the window restarted.
        toast.expire(first);
        assert_eq!(toast.message(), Some("Copied to clipboard"));

        toast.expire(second);
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn rapid_shows_reuse_the_single_slot() {
        let mut toast = AckToast::default();
        toast.begin("first");
        toast.begin("second");
        // One message at a time; the latest wins.
        assert_eq!(toast.message(), Some("second"));
    }
}
