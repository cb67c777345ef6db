//! Evidence-to-verdict pipeline: brand profile resolution, fit
//! evaluation, score reconciliation, and hotspot geometry.
//!
//! Model output is treated as untrusted throughout. Shape problems
//! (wrong types, out-of-range scores, unknown dimension names, stray
//! coordinates) are silently corrected or dropped; only an
//! unrecoverable-JSON response is fatal to the current operation.

pub mod error;
pub mod evaluate;
pub mod hotspots;
pub mod ingest;
pub mod json;
pub mod pipeline;
pub mod prompts;
pub mod reconcile;
pub mod research;
pub mod sanitize;

pub use error::AuditError;
pub use evaluate::evaluate_fit;
pub use hotspots::dedupe_hotspots;
pub use pipeline::{run_audit, AuditOutcome, AuditRequest};
pub use reconcile::{reconcile_scores, DIMENSION_NAMES};
pub use research::resolve_profile;
pub use sanitize::strip_circled;
