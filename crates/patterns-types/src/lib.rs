//! Foundation types for the patterns demo page.
//!
//! This crate holds the platform-agnostic pieces shared by every other
//! crate: the element handle and [`dom::Document`] trait that widgets talk
//! to, input events, site configuration, error types, and an in-memory
//! document used by tests and the headless driver.

pub mod config;
pub mod dom;
pub mod error;
pub mod input;
pub mod memory;

pub use dom::{Document, NodeId};
pub use error::{PatternsError, Result};
pub use memory::MemoryDocument;
