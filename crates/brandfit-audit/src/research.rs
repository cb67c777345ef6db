//! Brand profile resolution: macro-first research with a single bounded
//! refine pass.
//!
//! State machine: INITIAL -> (granularity check) -> ACCEPTED | REFINED.
//! The refine result wholly replaces the initial one and is not
//! re-validated; there is deliberately no retry loop.

use brandfit_core::BrandProfile;
use brandfit_llm::GeminiClient;

use crate::error::AuditError;
use crate::ingest::brand_profile_from_value;
use crate::json::extract_json_object;
use crate::prompts::{BRAND_RESEARCH_PROMPT, REFINE_BRAND_RESEARCH_PROMPT};

/// Resolve a macro-level brand profile from the evidence corpus.
///
/// # Errors
///
/// Returns [`AuditError::UnparseableResponse`] if either model response
/// carries no recoverable JSON object, with the raw text attached for
/// inspection.
pub async fn resolve_profile(
    llm: &GeminiClient,
    brand: &str,
    evidence: &str,
) -> Result<BrandProfile, AuditError> {
    let prompt =
        format!("{BRAND_RESEARCH_PROMPT}\n\n[BRAND]\n{brand}\n\n[EVIDENCE]\n{evidence}");
    let raw = llm.generate(&prompt, &[]).await;
    let value = extract_json_object(&raw).ok_or_else(|| AuditError::UnparseableResponse {
        stage: "brand research".to_string(),
        raw,
    })?;
    let profile = brand_profile_from_value(&value, brand);

    // Purely mechanical check; no semantic validation of content.
    let needs_refine = !profile.granularity.is_macro() || profile.category.trim().is_empty();
    if !needs_refine {
        return Ok(profile);
    }

    tracing::info!(
        brand = brand,
        granularity = ?profile.granularity,
        "initial research too micro-level, issuing refine pass"
    );
    let initial_json = serde_json::to_string(&profile)?;
    let refine_prompt = format!(
        "{REFINE_BRAND_RESEARCH_PROMPT}\n\n[BRAND]\n{brand}\n\n[EVIDENCE]\n{evidence}\n\n[INITIAL RESPONSE JSON]\n{initial_json}"
    );
    let raw = llm.generate(&refine_prompt, &[]).await;
    let value = extract_json_object(&raw).ok_or_else(|| AuditError::UnparseableResponse {
        stage: "brand research (refine)".to_string(),
        raw,
    })?;
    // Wholesale replacement, accepted as-is even if still non-macro.
    Ok(brand_profile_from_value(&value, brand))
}

#[cfg(test)]
#[path = "research_test.rs"]
mod tests;
