//! Web evidence gathering for brand research.
//!
//! Fetches user-supplied and guessed brand pages plus encyclopedia
//! summaries, distills each into a bounded labeled text pack, and joins
//! them into the evidence corpus consumed by the profile resolver.
//! Every per-source failure is non-fatal: the source contributes no
//! evidence and a warning is surfaced.

pub mod client;
pub mod error;
pub mod pack;
pub mod sources;
pub mod wiki;

pub use client::{EvidenceClient, FetchOutcome, GatheredEvidence};
pub use error::EvidenceError;
pub use pack::build_evidence_pack;
pub use sources::{brand_slug, candidate_urls};

/// Placeholder corpus when no source yielded any evidence. Downstream
/// prompts must handle it gracefully.
pub const INSUFFICIENT_EVIDENCE: &str = "(insufficient evidence)";

/// Visible separator between packs in the assembled corpus.
pub const PACK_SEPARATOR: &str = "\n\n---\n\n";
