//! Networking modules for the operator admin and keyword search endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs AJAX calls, `types` defines the wire schema, and `error`
//! defines the failure taxonomy shared by both pages.

pub mod api;
pub mod error;
pub mod types;
