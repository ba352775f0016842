//! Browser binding for the patterns demo page.
//!
//! This crate is a stub by default so the workspace builds on native
//! targets without a wasm toolchain.
//!
//! Enable the real binding with: `--features web` (and a wasm32 target).

/// Placeholder for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{WebDocument, start};
