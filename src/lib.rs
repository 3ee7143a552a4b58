//! A stored-XSS teaching board.
//!
//! One in-memory comment log is served through two boards: `/vulnerable`
//! writes comments into the page verbatim, `/safe` renders them through the
//! [`sanitize`] policies under a content security policy.

pub mod api;
pub mod config;
pub mod models;
pub mod render;
pub mod sanitize;
pub mod store;
