//! Platform abstraction layer
//!
//! Browser bindings that let a page drive a round:
//! - Spawn, frame and countdown callbacks
//! - Click resolution
//! - Preferences in LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod web;
