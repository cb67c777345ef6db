//! Fit evaluation: one combined (optionally multimodal) judgment request
//! plus deterministic post-processing of the response.

use brandfit_core::{BrandProfile, DedupeParams, FitVerdict};
use brandfit_llm::{GeminiClient, ImageInput};

use crate::error::AuditError;
use crate::ingest::fit_verdict_from_value;
use crate::json::extract_json_object;
use crate::prompts::FIT_EVAL_PROMPT;

/// Marker used when no copy text was provided.
pub(crate) const NO_COPY_MARKER: &str = "(none provided)";

/// Evaluate creative copy and images against the resolved brand profile.
///
/// The request embeds the scoring rubric, the serialized profile, the raw
/// copy text (or an explicit marker), and the image-indexing note; it is
/// multimodal iff `images` is non-empty. The parsed response goes through
/// score reconciliation and hotspot deduplication unconditionally.
///
/// # Errors
///
/// Returns [`AuditError::UnparseableResponse`] if the response carries no
/// recoverable JSON object.
pub async fn evaluate_fit(
    llm: &GeminiClient,
    profile: &BrandProfile,
    copy_text: &str,
    images: &[ImageInput],
    dedupe: DedupeParams,
) -> Result<FitVerdict, AuditError> {
    let context = serde_json::to_string(profile)?;
    let copy = copy_text.trim();
    let copy = if copy.is_empty() { NO_COPY_MARKER } else { copy };
    let prompt = format!(
        "{FIT_EVAL_PROMPT}\n\n[BRAND RESEARCH JSON]\n{context}\n\n[CREATIVE COPY]\n{copy}\n\n[IMAGES]\nIndexed from 1 in upload order."
    );

    let raw = llm.generate(&prompt, images).await;
    let value = extract_json_object(&raw).ok_or_else(|| AuditError::UnparseableResponse {
        stage: "fit evaluation".to_string(),
        raw,
    })?;
    Ok(fit_verdict_from_value(&value, dedupe))
}

#[cfg(test)]
#[path = "evaluate_test.rs"]
mod tests;
