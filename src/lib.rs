//! Word-Counter: a live word-count display for a form textarea
//!
//! This crate provides:
//! - A pure counting core (normalize, split, filter) usable from any Rust code
//! - WASM/DOM bindings that attach the counter to a page's textarea and
//!   mirror the count into a display element on every input event
//!
//! The counting core has no DOM dependency and is tested and benchmarked on
//! the host; the bindings are exercised in a browser via wasm-bindgen-test.

pub mod count;
pub mod error;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{WordCounter, DISPLAY_ID, SOURCE_ID};

// Re-export primary items
pub use count::{count_words, normalize, words, SEPARATORS};
pub use error::SetupError;
