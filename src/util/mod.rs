//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, page
//! config, reloads, form serialization) from page and component logic.

pub mod browser;
pub mod debounce;
pub mod page_config;
