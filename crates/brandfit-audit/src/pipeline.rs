//! End-to-end audit orchestration.
//!
//! Sequential, request-response: evidence gathering, profile resolution,
//! fit evaluation. Per-source fetch problems surface as warnings; only
//! missing inputs and unparseable model responses halt the run.

use brandfit_core::{AuditResult, DedupeParams};
use brandfit_evidence::EvidenceClient;
use brandfit_llm::{GeminiClient, ImageInput};

use crate::error::AuditError;
use crate::evaluate::evaluate_fit;
use crate::research::resolve_profile;

/// Maximum creative images per request (sample image included).
pub const MAX_IMAGES: usize = 3;

/// One audit request as collected from the front end.
#[derive(Debug, Clone, Default)]
pub struct AuditRequest {
    pub brand: String,
    /// Up to 3 reference URLs; extras are ignored.
    pub urls: Vec<String>,
    pub copy_text: String,
    /// Creative images in upload order, sample image (if enabled) first.
    pub images: Vec<ImageInput>,
}

/// Final result plus the non-fatal warnings accumulated along the way.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub result: AuditResult,
    pub warnings: Vec<String>,
}

/// Run the full audit pipeline.
///
/// # Errors
///
/// - [`AuditError::MissingBrand`] / [`AuditError::MissingCreative`] —
///   input validation, rejected before any external call.
/// - [`AuditError::UnparseableResponse`] — a model response carried no
///   recoverable JSON; the raw text is attached and later stages are not
///   attempted.
pub async fn run_audit(
    evidence: &EvidenceClient,
    llm: &GeminiClient,
    dedupe: DedupeParams,
    request: AuditRequest,
) -> Result<AuditOutcome, AuditError> {
    let brand = request.brand.trim();
    if brand.is_empty() {
        return Err(AuditError::MissingBrand);
    }
    if request.copy_text.trim().is_empty() && request.images.is_empty() {
        return Err(AuditError::MissingCreative);
    }

    let mut images = request.images;
    images.truncate(MAX_IMAGES);

    let gathered = evidence.gather(brand, &request.urls).await;
    tracing::info!(
        brand = brand,
        corpus_chars = gathered.corpus.len(),
        warnings = gathered.warnings.len(),
        "evidence gathered"
    );

    let profile = resolve_profile(llm, brand, &gathered.corpus).await?;
    tracing::info!(
        brand = brand,
        category = %profile.category,
        granularity = ?profile.granularity,
        "brand profile resolved"
    );

    let verdict = evaluate_fit(llm, &profile, &request.copy_text, &images, dedupe).await?;
    tracing::info!(
        brand = brand,
        overall = verdict.overall_score,
        verdict = ?verdict.verdict,
        "fit evaluated"
    );

    Ok(AuditOutcome {
        result: AuditResult {
            brand_research: profile,
            fit_evaluation: verdict,
        },
        warnings: gathered.warnings,
    })
}
