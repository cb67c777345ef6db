//! Shared data model and configuration for the brand fit auditor.
//!
//! All records here are value objects: built once by the ingest layer in
//! `brandfit-audit`, then read-only apart from the two explicit
//! reconciliation transforms (score recompute, hotspot merge).

pub mod config;
pub mod types;

pub use config::{load_config, parse_env_file, AppConfig, ConfigError, DedupeParams};
pub use types::{
    AuditResult, BrandIdentity, BrandProfile, BrandScope, CopySuggestion, CtaProposal,
    DimensionScore, FitVerdict, Granularity, Hotspot, HotspotGeometry, ImageFeedback,
    MarketPerception, Verdict,
};
