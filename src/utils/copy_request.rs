//! Copy request resolution
//!
//! A copy trigger carries either a literal string or a flag selecting the
//! current page address. Resolution picks the text for one activation, or
//! nothing when the trigger has no usable source.

/// One registered share button's data.
#[derive(Clone, Debug, PartialEq)]
pub struct CopyTrigger {
    /// Label shown next to the icon
    pub label: String,
    /// Literal text to copy (empty when the trigger only shares the page URL)
    pub text: String,
    /// Copy the current page address instead of the literal text
    pub use_page_url: bool,
}

impl CopyTrigger {
    /// Trigger that copies a fixed string.
    pub fn literal(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            use_page_url: false,
        }
    }

    /// Trigger that copies the current page address.
    pub fn page_url(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: String::new(),
            use_page_url: true,
        }
    }
}

/// Resolve the text for one activation.
///
/// The page URL flag overrides any literal text. An empty resolution means
/// the activation is abandoned before any clipboard or UI work.
pub fn resolve(trigger: &CopyTrigger, page_url: Option<String>) -> Option<String> {
    let mut text = trigger.text.clone();
    if trigger.use_page_url {
        text = page_url.unwrap_or_default();
    }
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// The current page's full address, when running in a browser.
pub fn current_page_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().href().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_text_resolves_as_is() {
        let trigger = CopyTrigger::literal("Copy reference", "ABC123");
        assert_eq!(resolve(&trigger, None), Some("ABC123".to_string()));
    }

    #[test]
    fn page_url_flag_overrides_literal_text() {
        let mut trigger = CopyTrigger::page_url("Copy link");
        trigger.text = "ABC123".to_string();
        assert_eq!(
            resolve(&trigger, Some("https://example.org/case/42".to_string())),
            Some("https://example.org/case/42".to_string())
        );
    }

    #[test]
    fn page_url_flag_without_address_abandons_activation() {
        // The flag overrides the literal unconditionally; no address means
        // nothing to copy, even when literal text is present.
        let mut trigger = CopyTrigger::page_url("Copy link");
        trigger.text = "ABC123".to_string();
        assert_eq!(resolve(&trigger, None), None);
    }

    #[test]
    fn empty_trigger_resolves_to_nothing() {
        let trigger = CopyTrigger::literal("Copy", "");
        assert_eq!(resolve(&trigger, None), None);
    }
}
