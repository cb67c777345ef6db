//! Deterministic score reconciliation.
//!
//! The model's arithmetic is never trusted: whenever at least one valid
//! dimension survives filtering, the overall score and verdict are
//! recomputed from the dimensions alone.

use brandfit_core::{DimensionScore, Verdict};
use serde_json::Value;

use crate::sanitize::{coerce_f64, coerce_string, strip_circled};

/// The three fixed evaluation axes. Dimensions with any other name are
/// dropped during reconciliation.
pub const DIMENSION_NAMES: [&str; 3] = ["Tone & Voice", "Visual Identity", "Brand-Product Relevance"];

/// Filter the model-reported dimension list down to recognized names
/// with numeric scores, clamping each score into `[0, 100]`.
#[must_use]
pub fn valid_dimensions(value: &Value) -> Vec<DimensionScore> {
    let Some(items) = value.get("dimensions").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let name = item.get("name").and_then(Value::as_str)?;
            if !DIMENSION_NAMES.contains(&name) {
                return None;
            }
            let score = coerce_f64(item.get("score"))?;
            Some(DimensionScore {
                name: name.to_string(),
                score: clamp_score(score),
                rationale: strip_circled(&coerce_string(item.get("rationale"))),
            })
        })
        .collect()
}

/// Recompute the aggregate score and verdict from the parsed response.
///
/// With one or more valid dimensions the overall score is the rounded
/// mean of their scores and the verdict is derived from it, discarding
/// the model's self-reported values. With none, the model's
/// `overall_score` is clamped into `[0, 100]` and the verdict derived
/// from that.
#[must_use]
pub fn reconcile_scores(value: &Value) -> (u8, Verdict, Vec<DimensionScore>) {
    let dimensions = valid_dimensions(value);
    let overall = if dimensions.is_empty() {
        clamp_score(coerce_f64(value.get("overall_score")).unwrap_or(0.0))
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = dimensions.iter().map(|d| f64::from(d.score)).sum::<f64>()
            / dimensions.len() as f64;
        clamp_score(mean)
    };
    (overall, Verdict::from_score(overall), dimensions)
}

// Ties round to even: a half-point mean (possible when fewer than three
// dimensions survive filtering) must not drift upward.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_score(raw: f64) -> u8 {
    raw.round_ties_even().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dims(entries: &[(&str, Value)]) -> Value {
        json!({
            "dimensions": entries
                .iter()
                .map(|(name, score)| json!({"name": name, "score": score, "rationale": "r"}))
                .collect::<Vec<_>>()
        })
    }

    #[test]
    fn overall_is_rounded_mean_of_valid_dimensions() {
        let value = dims(&[
            ("Tone & Voice", json!(72)),
            ("Visual Identity", json!(55)),
            ("Brand-Product Relevance", json!(68)),
        ]);
        let (overall, verdict, dimensions) = reconcile_scores(&value);
        assert_eq!(overall, 65);
        assert_eq!(verdict, Verdict::GoodFit);
        assert_eq!(dimensions.len(), 3);
    }

    #[test]
    fn model_self_report_discarded_when_dimensions_present() {
        let mut value = dims(&[("Tone & Voice", json!(90))]);
        value["overall_score"] = json!(10);
        value["verdict"] = json!("Misaligned");
        let (overall, verdict, _) = reconcile_scores(&value);
        assert_eq!(overall, 90);
        assert_eq!(verdict, Verdict::StrongFit);
    }

    #[test]
    fn unrecognized_dimension_names_dropped() {
        let value = dims(&[
            ("Tone & Voice", json!(80)),
            ("Vibes", json!(0)),
        ]);
        let (overall, _, dimensions) = reconcile_scores(&value);
        assert_eq!(dimensions.len(), 1);
        assert_eq!(overall, 80);
    }

    #[test]
    fn non_numeric_scores_dropped() {
        let value = dims(&[
            ("Tone & Voice", json!("excellent")),
            ("Visual Identity", json!(60)),
        ]);
        let (overall, _, dimensions) = reconcile_scores(&value);
        assert_eq!(dimensions.len(), 1);
        assert_eq!(overall, 60);
    }

    #[test]
    fn numeric_string_scores_accepted() {
        let value = dims(&[("Tone & Voice", json!("73"))]);
        let (overall, _, dimensions) = reconcile_scores(&value);
        assert_eq!(dimensions[0].score, 73);
        assert_eq!(overall, 73);
    }

    #[test]
    fn out_of_range_dimension_scores_clamped() {
        let value = dims(&[
            ("Tone & Voice", json!(150)),
            ("Visual Identity", json!(-20)),
        ]);
        let (_, _, dimensions) = reconcile_scores(&value);
        assert_eq!(dimensions[0].score, 100);
        assert_eq!(dimensions[1].score, 0);
    }

    #[test]
    fn zero_valid_dimensions_clamps_reported_overall() {
        let value = json!({"overall_score": 150, "dimensions": []});
        let (overall, verdict, dimensions) = reconcile_scores(&value);
        assert_eq!(overall, 100);
        assert_eq!(verdict, Verdict::StrongFit);
        assert!(dimensions.is_empty());

        let value = json!({"overall_score": -5});
        let (overall, verdict, _) = reconcile_scores(&value);
        assert_eq!(overall, 0);
        assert_eq!(verdict, Verdict::Misaligned);
    }

    #[test]
    fn missing_overall_defaults_to_zero() {
        let value = json!({});
        let (overall, verdict, _) = reconcile_scores(&value);
        assert_eq!(overall, 0);
        assert_eq!(verdict, Verdict::Misaligned);
    }

    #[test]
    fn half_point_means_round_to_even() {
        // Two surviving dimensions can produce a .5 mean.
        let value = dims(&[
            ("Tone & Voice", json!(72)),
            ("Visual Identity", json!(73)),
        ]);
        let (overall, _, _) = reconcile_scores(&value);
        assert_eq!(overall, 72);

        let value = dims(&[
            ("Tone & Voice", json!(71)),
            ("Visual Identity", json!(72)),
        ]);
        let (overall, _, _) = reconcile_scores(&value);
        assert_eq!(overall, 72);
    }

    #[test]
    fn verdict_boundaries_via_single_dimension() {
        for (score, expected) in [
            (39, Verdict::Misaligned),
            (40, Verdict::Borderline),
            (59, Verdict::Borderline),
            (60, Verdict::GoodFit),
            (79, Verdict::GoodFit),
            (80, Verdict::StrongFit),
        ] {
            let value = dims(&[("Tone & Voice", json!(score))]);
            let (overall, verdict, _) = reconcile_scores(&value);
            assert_eq!(overall, score);
            assert_eq!(verdict, expected, "score {score}");
        }
    }

    #[test]
    fn rationale_is_stripped_of_circled_numerals() {
        let value = json!({"dimensions": [
            {"name": "Tone & Voice", "score": 50, "rationale": "① off-brand tone"}
        ]});
        let (_, _, dimensions) = reconcile_scores(&value);
        assert_eq!(dimensions[0].rationale, "off-brand tone");
    }
}
