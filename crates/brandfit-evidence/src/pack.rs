//! HTML distillation into labeled evidence packs.
//!
//! Regex-based extraction: strips non-content blocks, then harvests the
//! title, heading levels, emphasized inline text, list items, and a
//! bounded plain-text body. Empty sections are omitted.

use std::collections::HashSet;

use regex::Regex;

/// Character budget for the `[BODY]` section.
pub const DEFAULT_MAX_BODY_CHARS: usize = 14_000;

/// Cap on `[LIST]` entries.
const MAX_LIST_ITEMS: usize = 300;

/// Distill raw HTML into a labeled evidence pack.
///
/// Sections in order: `[TITLE]`, `[HEADLINES]` (h1–h4, deduplicated),
/// `[EMPHASIS]` (strong/b/em/mark, deduplicated), `[LIST]` (li, first
/// 300, not deduplicated), `[BODY]` (tag-stripped text, first
/// `max_body_chars` characters). Deduplication preserves first-seen
/// order. Sections with no content are omitted.
#[must_use]
pub fn build_evidence_pack(html: &str, max_body_chars: usize) -> String {
    let stripped = strip_noncontent_blocks(html);

    let title = extract_first(&stripped, r"(?is)<title[^>]*>(.*?)</title>");
    let heads = dedup_preserve(extract_all(
        &stripped,
        r"(?is)<h[1-4][^>]*>(.*?)</h[1-4]>",
    ));
    let emph = dedup_preserve(extract_all(
        &stripped,
        r"(?is)<(?:strong|b|em|mark)\b[^>]*>(.*?)</(?:strong|b|em|mark)>",
    ));
    let lis: Vec<String> = extract_all(&stripped, r"(?is)<li\b[^>]*>(.*?)</li>")
        .into_iter()
        .take(MAX_LIST_ITEMS)
        .collect();
    let body: String = clean_text(&strip_tags(&stripped))
        .chars()
        .take(max_body_chars)
        .collect();

    let mut blocks = Vec::new();
    if !title.is_empty() {
        blocks.push(format!("[TITLE]\n{title}"));
    }
    if !heads.is_empty() {
        blocks.push(format!("[HEADLINES]\n- {}", heads.join("\n- ")));
    }
    if !emph.is_empty() {
        blocks.push(format!("[EMPHASIS]\n- {}", emph.join("\n- ")));
    }
    if !lis.is_empty() {
        blocks.push(format!("[LIST]\n- {}", lis.join("\n- ")));
    }
    if !body.is_empty() {
        blocks.push(format!("[BODY]\n{body}"));
    }
    blocks.join("\n\n")
}

/// Remove script/style/noscript/iframe/svg element bodies and meta tags.
fn strip_noncontent_blocks(html: &str) -> String {
    let mut out = html.to_string();
    for tag in ["script", "style", "noscript", "iframe", "svg"] {
        let re = Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}>")).expect("valid block regex");
        out = re.replace_all(&out, " ").into_owned();
    }
    let meta = Regex::new(r"(?is)<meta\b[^>]*>").expect("valid meta regex");
    meta.replace_all(&out, " ").into_owned()
}

fn extract_first(html: &str, pattern: &str) -> String {
    let re = Regex::new(pattern).expect("valid extraction regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| clean_text(&strip_tags(m.as_str())))
        .unwrap_or_default()
}

fn extract_all(html: &str, pattern: &str) -> Vec<String> {
    let re = Regex::new(pattern).expect("valid extraction regex");
    re.captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| clean_text(&strip_tags(m.as_str())))
        .filter(|s| !s.is_empty())
        .collect()
}

fn strip_tags(html: &str) -> String {
    let re = Regex::new(r"(?s)<[^>]+>").expect("valid tag regex");
    re.replace_all(html, " ").into_owned()
}

/// Collapse whitespace runs to single spaces and trim.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop repeated strings, keeping the first occurrence's position.
fn dedup_preserve(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
