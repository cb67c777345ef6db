//! Plain-text rendering of the audit result.
//!
//! Numbering of hotspots happens here, not in the model output; the
//! display caps (5 copy suggestions, 6 CTAs, 3 images, 20 hotspots)
//! bound the rendering only — the exported JSON is uncapped apart from
//! the geometry engine's 12-hotspot limit.

use brandfit_core::{AuditResult, Hotspot, HotspotGeometry};

const MAX_COPY_SUGGESTIONS: usize = 5;
const MAX_CTA_PROPOSALS: usize = 6;
const MAX_IMAGE_FEEDBACK: usize = 3;
const MAX_RENDERED_HOTSPOTS: usize = 20;

const BAR_WIDTH: usize = 40;

/// Circled numeral for 1-based display numbering, `(n)` past ⑳.
pub(crate) fn circled(n: usize) -> String {
    const CIRCLED: [char; 20] = [
        '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯',
        '⑰', '⑱', '⑲', '⑳',
    ];
    if (1..=CIRCLED.len()).contains(&n) {
        CIRCLED[n - 1].to_string()
    } else {
        format!("({n})")
    }
}

pub(crate) fn score_bar(score: u8) -> String {
    let filled = usize::from(score) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn geometry_summary(geometry: &HotspotGeometry) -> String {
    match geometry {
        HotspotGeometry::Circle { cx, cy, r } => {
            format!("circle cx={cx:.2} cy={cy:.2} r={r:.2}")
        }
        HotspotGeometry::Rect { x, y, w, h } => {
            format!("rect x={x:.2} y={y:.2} w={w:.2} h={h:.2}")
        }
    }
}

fn print_hotspot(number: usize, hotspot: &Hotspot) {
    println!(
        "    {} {} [{}]",
        circled(number),
        if hotspot.label.is_empty() {
            "(unlabeled)"
        } else {
            hotspot.label.as_str()
        },
        geometry_summary(&hotspot.geometry)
    );
    if !hotspot.risks.is_empty() {
        println!("       risks: {}", hotspot.risks.join("; "));
    }
    if !hotspot.suggested_edits.is_empty() {
        println!("       edits: {}", hotspot.suggested_edits.join("; "));
    }
}

pub(crate) fn print_summary(result: &AuditResult) {
    let profile = &result.brand_research;
    let fit = &result.fit_evaluation;

    println!("== Brand research ==");
    println!("brand:       {}", profile.brand);
    println!("category:    {}", profile.category);
    println!(
        "scope:       {:?} / granularity: {:?} / confidence: {:.2}",
        profile.brand_scope, profile.granularity, profile.confidence
    );
    if !profile.executive_summary.is_empty() {
        println!("summary:     {}", profile.executive_summary);
    }

    println!("\n== Fit evaluation ==");
    println!("overall: {}/100  {}", fit.overall_score, fit.verdict);
    for dim in &fit.dimensions {
        println!(
            "  {:<28} {} {:>3}/100",
            dim.name,
            score_bar(dim.score),
            dim.score
        );
        if !dim.rationale.is_empty() {
            println!("      {}", dim.rationale);
        }
    }
    if !fit.reasoning_notes.is_empty() {
        println!("notes: {}", fit.reasoning_notes);
    }

    if !fit.copy_suggestions.is_empty() {
        println!("\n== Copy suggestions ==");
        for s in fit.copy_suggestions.iter().take(MAX_COPY_SUGGESTIONS) {
            println!("  before: {}", s.before);
            println!("  after:  {}", s.after);
            if !s.reason.is_empty() {
                println!("  reason: {}", s.reason);
            }
        }
    }

    if !fit.cta_proposals.is_empty() {
        println!("\n== CTA proposals ==");
        for c in fit.cta_proposals.iter().take(MAX_CTA_PROPOSALS) {
            println!("  - {} — {}", c.cta, c.expected_effect);
        }
    }

    if !fit.image_feedback.is_empty() {
        println!("\n== Image feedback ==");
        for feedback in fit.image_feedback.iter().take(MAX_IMAGE_FEEDBACK) {
            println!("image {}: {}", feedback.index, feedback.notes);
            for (i, hotspot) in feedback
                .hotspots
                .iter()
                .take(MAX_RENDERED_HOTSPOTS)
                .enumerate()
            {
                print_hotspot(i + 1, hotspot);
            }
            if feedback.hotspots.is_empty() {
                for risk in &feedback.risks {
                    println!("    risk: {risk}");
                }
                for edit in &feedback.suggested_edits {
                    println!("    edit: {edit}");
                }
            }
        }
    }
}
