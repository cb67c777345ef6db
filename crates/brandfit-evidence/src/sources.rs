//! Candidate brand source derivation.
//!
//! When the user supplies no (or few) reference URLs, we derive a naive
//! slug from the brand name and probe a fixed fan-out of likely official
//! pages. Best-effort discovery: a brand whose site does not match the
//! slug pattern simply yields nothing.

/// Lowercase the brand name and strip everything but ASCII alphanumerics.
#[must_use]
pub fn brand_slug(brand: &str) -> String {
    brand
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Fixed candidate URL fan-out for a brand slug: root, about, company and
/// Korean-locale paths over `.com`/`.co.kr` hosts, plus the social
/// profile. Order matters: probing stops at 3 validated hits.
#[must_use]
pub fn candidate_urls(slug: &str) -> Vec<String> {
    let mut cands = Vec::new();
    for base in [
        format!("https://{slug}.com"),
        format!("https://www.{slug}.com"),
        format!("https://{slug}.co.kr"),
        format!("https://www.{slug}.co.kr"),
    ] {
        cands.push(base.clone());
        cands.push(format!("{base}/about"));
        cands.push(format!("{base}/company"));
        cands.push(format!("{base}/kr"));
    }
    cands.push(format!("https://www.instagram.com/{slug}"));
    cands
}
