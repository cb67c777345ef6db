//! Value objects for the audit pipeline: brand profile, fit verdict, hotspots.

use serde::{Deserialize, Serialize};

/// Corporate/masterbrand/product-line framing of a brand description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandScope {
    Corporate,
    Masterbrand,
    ProductLine,
}

impl BrandScope {
    /// Lenient parse for model-reported values. Unrecognized input falls
    /// back to `Masterbrand`, the schema's middle ground.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "corporate" => Self::Corporate,
            "product_line" | "product-line" | "productline" => Self::ProductLine,
            _ => Self::Masterbrand,
        }
    }
}

/// Macro (corporate/masterbrand) vs. micro (SKU/campaign) framing.
///
/// The resolver enforces macro: any non-macro first pass triggers the
/// single refine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Macro,
    Meso,
    Micro,
}

impl Granularity {
    /// Lenient parse. Unrecognized input maps to `Micro` so that a
    /// malformed granularity field still triggers refinement.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "macro" => Self::Macro,
            "meso" => Self::Meso,
            _ => Self::Micro,
        }
    }

    #[must_use]
    pub fn is_macro(self) -> bool {
        self == Self::Macro
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub positioning: String,
    pub values: Vec<String>,
    pub tone_voice: Vec<String>,
    pub visual_cues: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketPerception {
    pub top_keywords: Vec<String>,
    pub explanation: String,
    pub notes: String,
}

/// Structured brand characterization produced by the research call.
///
/// Produced whole by one model call and optionally replaced whole by the
/// refine call; never partially merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub brand: String,
    pub category: String,
    pub brand_scope: BrandScope,
    pub granularity: Granularity,
    pub executive_summary: String,
    pub primary_offerings: Vec<String>,
    pub brand_identity: BrandIdentity,
    pub target_audience: Vec<String>,
    pub market_perception: MarketPerception,
    /// Sub-brand/campaign mentions are confined here by the prompt contract
    /// (at most 3, not mechanically enforced).
    pub notable_programs_or_subbrands: Vec<String>,
    pub evidence_notes: String,
    pub confidence: f64,
}

/// Verdict bands over the reconciled overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Strong fit")]
    StrongFit,
    #[serde(rename = "Good fit")]
    GoodFit,
    #[serde(rename = "Borderline")]
    Borderline,
    #[serde(rename = "Misaligned")]
    Misaligned,
}

impl Verdict {
    /// Threshold table, inclusive lower bounds, evaluated top-down.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::StrongFit
        } else if score >= 60 {
            Self::GoodFit
        } else if score >= 40 {
            Self::Borderline
        } else {
            Self::Misaligned
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::StrongFit => "Strong fit",
            Self::GoodFit => "Good fit",
            Self::Borderline => "Borderline",
            Self::Misaligned => "Misaligned",
        };
        f.write_str(label)
    }
}

/// One of the three fixed evaluation axes with its reconciled score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    pub score: u8,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopySuggestion {
    pub before: String,
    pub after: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaProposal {
    pub cta: String,
    pub expected_effect: String,
}

/// Shape-tagged region on a creative image, all coordinates normalized
/// to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum HotspotGeometry {
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, w: f64, h: f64 },
}

/// Brand-risk annotation over one region of a creative image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    #[serde(flatten)]
    pub geometry: HotspotGeometry,
    pub label: String,
    pub risks: Vec<String>,
    pub suggested_edits: Vec<String>,
}

/// Per-image feedback entry, hotspots post-deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFeedback {
    /// 1-based image index in upload order.
    pub index: usize,
    pub notes: String,
    pub risks: Vec<String>,
    pub suggested_edits: Vec<String>,
    pub hotspots: Vec<Hotspot>,
}

/// Multi-dimensional fit judgment, post score reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitVerdict {
    pub overall_score: u8,
    pub verdict: Verdict,
    pub dimensions: Vec<DimensionScore>,
    pub copy_suggestions: Vec<CopySuggestion>,
    pub cta_proposals: Vec<CtaProposal>,
    pub image_feedback: Vec<ImageFeedback>,
    pub reasoning_notes: String,
}

/// The one exportable result blob: exactly two top-level keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub brand_research: BrandProfile,
    pub fit_evaluation: FitVerdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_thresholds_at_boundaries() {
        assert_eq!(Verdict::from_score(39), Verdict::Misaligned);
        assert_eq!(Verdict::from_score(40), Verdict::Borderline);
        assert_eq!(Verdict::from_score(59), Verdict::Borderline);
        assert_eq!(Verdict::from_score(60), Verdict::GoodFit);
        assert_eq!(Verdict::from_score(79), Verdict::GoodFit);
        assert_eq!(Verdict::from_score(80), Verdict::StrongFit);
        assert_eq!(Verdict::from_score(100), Verdict::StrongFit);
        assert_eq!(Verdict::from_score(0), Verdict::Misaligned);
    }

    #[test]
    fn verdict_serializes_with_display_labels() {
        let v = serde_json::to_value(Verdict::GoodFit).unwrap();
        assert_eq!(v, serde_json::json!("Good fit"));
    }

    #[test]
    fn granularity_parse_is_case_insensitive() {
        assert_eq!(Granularity::parse("MACRO"), Granularity::Macro);
        assert_eq!(Granularity::parse(" meso "), Granularity::Meso);
    }

    #[test]
    fn granularity_parse_unknown_falls_back_to_micro() {
        assert_eq!(Granularity::parse("sku-level"), Granularity::Micro);
        assert_eq!(Granularity::parse(""), Granularity::Micro);
    }

    #[test]
    fn brand_scope_parse_variants() {
        assert_eq!(BrandScope::parse("corporate"), BrandScope::Corporate);
        assert_eq!(BrandScope::parse("product_line"), BrandScope::ProductLine);
        assert_eq!(BrandScope::parse("whatever"), BrandScope::Masterbrand);
    }

    #[test]
    fn hotspot_geometry_serializes_shape_tag() {
        let h = Hotspot {
            geometry: HotspotGeometry::Circle {
                cx: 0.5,
                cy: 0.4,
                r: 0.1,
            },
            label: "logo".to_string(),
            risks: vec![],
            suggested_edits: vec![],
        };
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["shape"], "circle");
        assert_eq!(v["cx"], 0.5);
        let round: Hotspot = serde_json::from_value(v).unwrap();
        assert_eq!(round, h);
    }
}
