// UI Components
// This module contains all reusable UI components

pub mod copy_button;
pub mod icons;
pub mod toast;

pub use copy_button::{CopyButton, CopyTriggerBar};
pub use toast::ToastProvider;
