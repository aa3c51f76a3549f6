//! Shared building blocks: toasts, the loading overlay and fetch helpers.

pub mod error;
pub mod fetch_hook;
pub mod loading;
pub mod toast;
