//! Coercion of parsed model JSON into the typed data model.
//!
//! Every field is coerced to its fixed shape here: absence becomes an
//! explicit empty/default value, never a null propagated downstream.

use brandfit_core::{
    BrandIdentity, BrandProfile, BrandScope, CopySuggestion, CtaProposal, DedupeParams,
    FitVerdict, Granularity, Hotspot, HotspotGeometry, ImageFeedback, MarketPerception,
};
use serde_json::Value;

use crate::hotspots::dedupe_hotspots;
use crate::reconcile::reconcile_scores;
use crate::sanitize::{coerce_f64, coerce_list, coerce_string, strip_circled};

/// Build a [`BrandProfile`] from a parsed research response.
///
/// `fallback_brand` fills the brand field when the model omits it.
#[must_use]
pub fn brand_profile_from_value(value: &Value, fallback_brand: &str) -> BrandProfile {
    let identity = value.get("brand_identity");
    let perception = value.get("market_perception");

    let brand = coerce_string(value.get("brand"));
    BrandProfile {
        brand: if brand.trim().is_empty() {
            fallback_brand.to_string()
        } else {
            brand
        },
        category: coerce_string(value.get("category")),
        brand_scope: BrandScope::parse(&coerce_string(value.get("brand_scope"))),
        granularity: Granularity::parse(&coerce_string(value.get("granularity"))),
        executive_summary: coerce_string(value.get("executive_summary")),
        primary_offerings: coerce_list(value.get("primary_offerings")),
        brand_identity: BrandIdentity {
            positioning: coerce_string(identity.and_then(|v| v.get("positioning"))),
            values: coerce_list(identity.and_then(|v| v.get("values"))),
            tone_voice: coerce_list(identity.and_then(|v| v.get("tone_voice"))),
            visual_cues: coerce_list(identity.and_then(|v| v.get("visual_cues"))),
        },
        target_audience: coerce_list(value.get("target_audience")),
        market_perception: MarketPerception {
            top_keywords: coerce_list(perception.and_then(|v| v.get("top_keywords"))),
            explanation: coerce_string(perception.and_then(|v| v.get("explanation"))),
            notes: coerce_string(perception.and_then(|v| v.get("notes"))),
        },
        notable_programs_or_subbrands: coerce_list(value.get("notable_programs_or_subbrands")),
        evidence_notes: coerce_string(value.get("evidence_notes")),
        confidence: coerce_f64(value.get("confidence"))
            .unwrap_or(0.0)
            .clamp(0.0, 1.0),
    }
}

/// Build a reconciled [`FitVerdict`] from a parsed evaluation response:
/// scores recomputed, free text stripped of circled numerals, hotspots
/// deduplicated per image.
#[must_use]
pub fn fit_verdict_from_value(value: &Value, dedupe: DedupeParams) -> FitVerdict {
    let (overall_score, verdict, dimensions) = reconcile_scores(value);

    let copy_suggestions = objects(value.get("copy_suggestions"))
        .map(|item| CopySuggestion {
            before: strip_circled(&coerce_string(item.get("before"))),
            after: strip_circled(&coerce_string(item.get("after"))),
            reason: strip_circled(&coerce_string(item.get("reason"))),
        })
        .collect();

    let cta_proposals = objects(value.get("cta_proposals"))
        .map(|item| CtaProposal {
            cta: strip_circled(&coerce_string(item.get("cta"))),
            expected_effect: strip_circled(&coerce_string(item.get("expected_effect"))),
        })
        .collect();

    let image_feedback = objects(value.get("image_feedback"))
        .map(|item| image_feedback_from_value(item, dedupe))
        .collect();

    FitVerdict {
        overall_score,
        verdict,
        dimensions,
        copy_suggestions,
        cta_proposals,
        image_feedback,
        reasoning_notes: strip_circled(&coerce_string(value.get("reasoning_notes"))),
    }
}

fn image_feedback_from_value(item: &Value, dedupe: DedupeParams) -> ImageFeedback {
    let hotspots: Vec<Hotspot> = item
        .get("hotspots")
        .and_then(Value::as_array)
        .map(|raw| raw.iter().filter_map(hotspot_from_value).collect())
        .unwrap_or_default();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = coerce_f64(item.get("index")).map_or(1, |i| i.max(1.0) as usize);

    ImageFeedback {
        index,
        notes: strip_circled(&coerce_string(item.get("notes"))),
        risks: stripped_list(item.get("risks")),
        suggested_edits: stripped_list(item.get("suggested_edits")),
        hotspots: dedupe_hotspots(hotspots, dedupe),
    }
}

/// Coerce one hotspot candidate. Non-object entries are dropped;
/// missing coordinates default to a centered small circle / zero rect.
fn hotspot_from_value(value: &Value) -> Option<Hotspot> {
    if !value.is_object() {
        return None;
    }
    let coord = |key: &str, default: f64| coerce_f64(value.get(key)).unwrap_or(default);

    let shape = coerce_string(value.get("shape")).to_lowercase();
    let geometry = if shape == "rect" {
        HotspotGeometry::Rect {
            x: coord("x", 0.0),
            y: coord("y", 0.0),
            w: coord("w", 0.0),
            h: coord("h", 0.0),
        }
    } else {
        HotspotGeometry::Circle {
            cx: coord("cx", 0.5),
            cy: coord("cy", 0.5),
            r: coord("r", 0.1),
        }
    };

    Some(Hotspot {
        geometry,
        label: strip_circled(&coerce_string(value.get("label"))),
        risks: stripped_list(value.get("risks")),
        suggested_edits: stripped_list(value.get("suggested_edits")),
    })
}

fn stripped_list(value: Option<&Value>) -> Vec<String> {
    coerce_list(value)
        .iter()
        .map(|s| strip_circled(s))
        .filter(|s| !s.is_empty())
        .collect()
}

fn objects<'a>(value: Option<&'a Value>) -> impl Iterator<Item = &'a Value> {
    value
        .and_then(Value::as_array)
        .map(|a| a.as_slice())
        .unwrap_or_default()
        .iter()
        .filter(|v| v.is_object())
}
