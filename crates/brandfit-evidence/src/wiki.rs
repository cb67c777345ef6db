//! Encyclopedia summary lookup.
//!
//! Two fixed locales, searched in order; each contributes a labeled
//! `[WIKIPEDIA:lang/title]` block if found. Both failing yields an empty
//! string, never an error.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::client::EvidenceClient;

const LOCALES: [&str; 2] = ["ko", "en"];

const WIKI_TIMEOUT: Duration = Duration::from_secs(10);

impl EvidenceClient {
    /// Fetch and concatenate encyclopedia summaries for the brand across
    /// the fixed locales. Memoized per brand for the process lifetime.
    pub async fn encyclopedia_summary(&self, brand: &str) -> String {
        let cached = self
            .wiki_cache
            .lock()
            .expect("wiki cache poisoned")
            .get(brand)
            .cloned();
        if let Some(summary) = cached {
            return summary;
        }

        let mut blocks = Vec::new();
        for lang in LOCALES {
            if let Some(block) = self.locale_summary(lang, brand).await {
                blocks.push(block);
            }
        }
        let summary = blocks.join("\n\n");

        self.wiki_cache
            .lock()
            .expect("wiki cache poisoned")
            .insert(brand.to_string(), summary.clone());
        summary
    }

    /// Top-1 title search followed by a summary fetch for one locale.
    /// Any failure along the way yields `None`.
    async fn locale_summary(&self, lang: &str, brand: &str) -> Option<String> {
        let host = self.wiki_host(lang);

        let search: Value = self
            .strict
            .get(format!("{host}/w/rest.php/v1/search/title"))
            .query(&[("q", brand), ("limit", "1")])
            .timeout(WIKI_TIMEOUT)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?
            .json()
            .await
            .ok()?;

        let title = search
            .get("pages")?
            .as_array()?
            .first()?
            .get("title")?
            .as_str()?
            .to_string();

        let encoded = utf8_percent_encode(&title, NON_ALPHANUMERIC).to_string();
        let summary: Value = self
            .strict
            .get(format!("{host}/api/rest_v1/page/summary/{encoded}"))
            .timeout(WIKI_TIMEOUT)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?
            .json()
            .await
            .ok()?;

        let extract = summary
            .get("extract")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        Some(format!("[WIKIPEDIA:{lang}/{title}]\n{extract}"))
    }

    fn wiki_host(&self, lang: &str) -> String {
        self.wiki_base
            .clone()
            .unwrap_or_else(|| format!("https://{lang}.wikipedia.org"))
    }
}
