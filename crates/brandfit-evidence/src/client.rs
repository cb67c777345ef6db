//! HTTP client for evidence gathering.
//!
//! Two underlying `reqwest` clients: a strict one, and a
//! verification-disabled fallback used exactly once per URL when the
//! strict fetch fails on a TLS certificate error. The fallback is a
//! deliberate trust relaxation and always surfaces a warning.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;

use crate::error::EvidenceError;
use crate::pack::build_evidence_pack;
use crate::sources::{brand_slug, candidate_urls};
use crate::{INSUFFICIENT_EVIDENCE, PACK_SEPARATOR};

pub(crate) const BROWSER_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Maximum user-supplied reference URLs considered.
pub const MAX_USER_URLS: usize = 3;

/// Maximum guessed sources to validate.
const MAX_GUESSED_SOURCES: usize = 3;

/// Result of fetching one page.
///
/// `warning` carries either the TLS-relaxation notice (alongside content)
/// or the failure description (with no content). Never both absent unless
/// the fetch fully succeeded.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub html: Option<String>,
    pub warning: Option<String>,
}

/// Assembled evidence corpus plus non-fatal per-source warnings.
#[derive(Debug, Clone)]
pub struct GatheredEvidence {
    pub corpus: String,
    pub warnings: Vec<String>,
}

pub struct EvidenceClient {
    pub(crate) strict: Client,
    insecure: Client,
    max_body_chars: usize,
    /// Override for the encyclopedia host, mainly for tests. `None` means
    /// the per-locale public host.
    pub(crate) wiki_base: Option<String>,
    pub(crate) wiki_cache: Mutex<HashMap<String, String>>,
    sources_cache: Mutex<HashMap<String, Vec<String>>>,
}

impl EvidenceClient {
    /// Creates a client pair with the configured timeout and a browser-like
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::Http`] if either underlying `reqwest`
    /// client cannot be constructed.
    pub fn new(timeout_secs: u64, max_body_chars: usize) -> Result<Self, EvidenceError> {
        let strict = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_UA)
            .build()?;
        let insecure = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_UA)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self {
            strict,
            insecure,
            max_body_chars,
            wiki_base: None,
            wiki_cache: Mutex::new(HashMap::new()),
            sources_cache: Mutex::new(HashMap::new()),
        })
    }

    /// Point encyclopedia lookups at a fixed base URL instead of the
    /// per-locale public host.
    #[must_use]
    pub fn with_wiki_base(mut self, base: impl Into<String>) -> Self {
        self.wiki_base = Some(base.into());
        self
    }

    /// Fetch one page, retrying once with certificate verification
    /// disabled if the strict fetch fails on a TLS error.
    ///
    /// Never returns an error: failures degrade to `html: None` with a
    /// descriptive warning string.
    pub async fn fetch_page(&self, url: &str) -> FetchOutcome {
        if url.trim().is_empty() {
            return FetchOutcome {
                html: None,
                warning: Some("empty URL".to_string()),
            };
        }

        match self.get_text(&self.strict, url).await {
            Ok(html) => FetchOutcome {
                html: Some(html),
                warning: None,
            },
            Err(e) if is_tls_error(&e) => match self.get_text(&self.insecure, url).await {
                Ok(html) => FetchOutcome {
                    html: Some(html),
                    warning: Some(
                        "TLS certificate verification failed; fetched with verification disabled"
                            .to_string(),
                    ),
                },
                Err(e2) => FetchOutcome {
                    html: None,
                    warning: Some(format!("fetch failed (TLS): {e2}")),
                },
            },
            Err(e) => FetchOutcome {
                html: None,
                warning: Some(format!("fetch failed: {e}")),
            },
        }
    }

    async fn get_text(&self, client: &Client, url: &str) -> Result<String, reqwest::Error> {
        let response = client.get(url).send().await?;
        let response = response.error_for_status()?;
        response.text().await
    }

    /// Probe candidate official pages for a brand, skipping URLs already
    /// supplied (case-insensitive), stopping at 3 validated hits.
    ///
    /// Memoized per (brand, supplied set) for the process lifetime:
    /// idempotent and safe to recompute, never invalidated.
    pub async fn guess_brand_sources(&self, brand: &str, already: &[String]) -> Vec<String> {
        let mut key_parts: Vec<String> = already.iter().map(|u| u.trim().to_lowercase()).collect();
        key_parts.sort();
        let key = format!("{}|{}", brand_slug(brand), key_parts.join(","));

        let cached = self
            .sources_cache
            .lock()
            .expect("sources cache poisoned")
            .get(&key)
            .cloned();
        if let Some(picked) = cached {
            return picked;
        }

        let slug = brand_slug(brand);
        let mut picked = Vec::new();
        if !slug.is_empty() {
            let seen: Vec<String> = key_parts;
            for url in candidate_urls(&slug) {
                if picked.len() >= MAX_GUESSED_SOURCES {
                    break;
                }
                if seen.contains(&url.to_lowercase()) {
                    continue;
                }
                let outcome = self.fetch_page(&url).await;
                if outcome.html.is_some() {
                    tracing::debug!(url = %url, "validated guessed brand source");
                    picked.push(url);
                }
            }
        }

        self.sources_cache
            .lock()
            .expect("sources cache poisoned")
            .insert(key, picked.clone());
        picked
    }

    /// Gather the full evidence corpus for a brand: explicit URLs first,
    /// then guessed sources, then the encyclopedia block.
    ///
    /// Per-source failures are warnings, never errors. An empty harvest
    /// yields the [`INSUFFICIENT_EVIDENCE`] placeholder corpus.
    pub async fn gather(&self, brand: &str, urls: &[String]) -> GatheredEvidence {
        let explicit: Vec<String> = urls
            .iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .take(MAX_USER_URLS)
            .collect();

        let guessed = self.guess_brand_sources(brand, &explicit).await;

        let mut packs = Vec::new();
        let mut warnings = Vec::new();
        for url in explicit.iter().chain(guessed.iter()) {
            let outcome = self.fetch_page(url).await;
            if let Some(html) = outcome.html {
                packs.push(format!(
                    "[SOURCE]\n{url}\n\n{}",
                    build_evidence_pack(&html, self.max_body_chars)
                ));
            }
            if let Some(warning) = outcome.warning {
                tracing::warn!(url = %url, warning = %warning, "evidence source degraded");
                warnings.push(format!("{url} → {warning}"));
            }
        }

        let wiki = self.encyclopedia_summary(brand).await;
        if !wiki.is_empty() {
            packs.push(wiki);
        }

        let corpus = if packs.is_empty() {
            INSUFFICIENT_EVIDENCE.to_string()
        } else {
            packs.join(PACK_SEPARATOR)
        };
        GatheredEvidence { corpus, warnings }
    }
}

/// Heuristic TLS-failure check over an error chain. Takes the erased
/// trait object so classification can be tested without a live handshake.
pub(crate) fn is_tls_error(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        let msg = e.to_string().to_lowercase();
        if msg.contains("certificate") || msg.contains("tls") || msg.contains("ssl") {
            return true;
        }
        source = e.source();
    }
    false
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
