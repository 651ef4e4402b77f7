//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page provides its own state contexts and delegates rendering to
//! `components`. The page config is provided once by `App`.

pub mod keyword_search;
pub mod search_operators;
