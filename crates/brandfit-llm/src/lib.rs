//! Opaque language-model call transport.
//!
//! One operation: prompt (plus ordered image parts) in, text out. The
//! transport requests JSON-formatted text output with thinking disabled,
//! and converts every transport failure into a returned error string —
//! callers always receive a `String`, empty or populated.

pub mod client;
pub mod error;

pub use client::{GeminiClient, ImageInput};
pub use error::LlmError;
