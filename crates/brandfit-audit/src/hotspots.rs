//! Hotspot geometry: normalization, clipping, and overlap merging.
//!
//! Candidates are processed largest-area first so that when two
//! overlapping hotspots merge, the larger region's geometry is the
//! canonical one and the smaller's annotation text folds in. Output
//! keeps that order, which drives the numbering shown to the user.

use brandfit_core::{DedupeParams, Hotspot, HotspotGeometry};

/// Hard cap on kept regions per image.
pub const MAX_HOTSPOTS: usize = 12;

#[derive(Debug, Clone, Copy)]
struct BBox {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl BBox {
    fn area(self) -> f64 {
        (self.x2 - self.x1).max(0.0) * (self.y2 - self.y1).max(0.0)
    }

    fn center(self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Uniform bounding box regardless of shape.
fn bbox(geometry: &HotspotGeometry) -> BBox {
    match *geometry {
        HotspotGeometry::Circle { cx, cy, r } => BBox {
            x1: cx - r,
            y1: cy - r,
            x2: cx + r,
            y2: cy + r,
        },
        HotspotGeometry::Rect { x, y, w, h } => BBox {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        },
    }
}

fn iou(a: BBox, b: BBox) -> f64 {
    let ix = (a.x2.min(b.x2) - a.x1.max(b.x1)).max(0.0);
    let iy = (a.y2.min(b.y2) - a.y1.max(b.y1)).max(0.0);
    let inter = ix * iy;
    let union = a.area() + b.area() - inter;
    if union > 0.0 {
        inter / union
    } else {
        0.0
    }
}

fn center_dist(a: BBox, b: BBox) -> f64 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    (ax - bx).hypot(ay - by)
}

/// Clamp every positional/dimensional field into `[0, 1]`.
fn clamp_geometry(geometry: &mut HotspotGeometry) {
    let clamp = |v: &mut f64| *v = v.clamp(0.0, 1.0);
    match geometry {
        HotspotGeometry::Circle { cx, cy, r } => {
            clamp(cx);
            clamp(cy);
            clamp(r);
        }
        HotspotGeometry::Rect { x, y, w, h } => {
            clamp(x);
            clamp(y);
            clamp(w);
            clamp(h);
        }
    }
}

/// Union `extra` into `base`, keeping `base`'s order and skipping
/// duplicates.
fn union_preserving_order(base: &mut Vec<String>, extra: Vec<String>) {
    for item in extra {
        if !base.contains(&item) {
            base.push(item);
        }
    }
}

/// Fold the smaller hotspot's annotation text into the kept (larger)
/// one. Geometry is untouched.
fn merge_into(kept: &mut Hotspot, other: Hotspot) {
    if kept.label.is_empty() && !other.label.is_empty() {
        kept.label = other.label;
    }
    union_preserving_order(&mut kept.risks, other.risks);
    union_preserving_order(&mut kept.suggested_edits, other.suggested_edits);
}

/// Deduplicate one image's hotspot candidates.
///
/// Coordinates are clamped into `[0, 1]` up front, candidates sorted
/// largest-area first (stable on ties), and each candidate either merges
/// into the first kept region it overlaps — bounding-box IoU above
/// `params.iou_threshold` or center distance below
/// `params.center_dist_threshold` — or becomes a new kept region.
/// Result is capped at [`MAX_HOTSPOTS`], largest first.
///
/// Clamping before the merge scan (rather than after) keeps the
/// operation idempotent and input-order independent for any input,
/// including out-of-bounds coordinates.
#[must_use]
pub fn dedupe_hotspots(hotspots: Vec<Hotspot>, params: DedupeParams) -> Vec<Hotspot> {
    let mut candidates = hotspots;
    for h in &mut candidates {
        clamp_geometry(&mut h.geometry);
    }
    // Stable sort: equal areas keep encounter order.
    candidates.sort_by(|a, b| {
        bbox(&b.geometry)
            .area()
            .partial_cmp(&bbox(&a.geometry).area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<Hotspot> = Vec::new();
    for candidate in candidates {
        let cb = bbox(&candidate.geometry);
        let merged = kept.iter_mut().find(|k| {
            let kb = bbox(&k.geometry);
            iou(cb, kb) > params.iou_threshold || center_dist(cb, kb) < params.center_dist_threshold
        });
        match merged {
            Some(target) => merge_into(target, candidate),
            None => kept.push(candidate),
        }
    }
    kept.truncate(MAX_HOTSPOTS);
    kept
}
