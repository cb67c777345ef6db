use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn test_client() -> EvidenceClient {
    EvidenceClient::new(5, 14_000).unwrap()
}

#[tokio::test]
async fn fetch_page_returns_html_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><title>ok</title></html>"))
        .mount(&server)
        .await;

    let outcome = test_client().fetch_page(&server.uri()).await;
    assert!(outcome.html.unwrap().contains("ok"));
    assert!(outcome.warning.is_none());
}

#[tokio::test]
async fn fetch_page_http_error_is_nonfatal_warning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = test_client().fetch_page(&server.uri()).await;
    assert!(outcome.html.is_none());
    let warning = outcome.warning.unwrap();
    assert!(warning.contains("fetch failed"), "warning: {warning}");
}

#[tokio::test]
async fn fetch_page_connection_refused_is_nonfatal_warning() {
    // Port 1 is never listening.
    let outcome = test_client().fetch_page("http://127.0.0.1:1/").await;
    assert!(outcome.html.is_none());
    assert!(outcome.warning.is_some());
}

#[tokio::test]
async fn fetch_page_empty_url_is_warning() {
    let outcome = test_client().fetch_page("  ").await;
    assert!(outcome.html.is_none());
    assert_eq!(outcome.warning.unwrap(), "empty URL");
}

#[tokio::test]
async fn gather_collects_packs_and_warnings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/brand"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><title>Acme</title><body>making things</body></html>"),
        )
        .mount(&server)
        .await;
    // Everything else (wiki lookups included) 404s.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    // Brand name with no slug-able characters: source guessing is skipped,
    // keeping the test off the real network.
    let client = test_client().with_wiki_base(server.uri());
    let good = format!("{}/brand", server.uri());
    let bad = "http://127.0.0.1:1/down".to_string();
    let gathered = client.gather("!!!", &[good.clone(), bad.clone()]).await;

    assert!(gathered.corpus.contains(&format!("[SOURCE]\n{good}")));
    assert!(gathered.corpus.contains("[TITLE]\nAcme"));
    assert_eq!(gathered.warnings.len(), 1);
    assert!(
        gathered.warnings[0].contains(&bad),
        "warning should name the URL: {}",
        gathered.warnings[0]
    );
}

#[tokio::test]
async fn gather_with_no_sources_yields_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client().with_wiki_base(server.uri());
    let gathered = client.gather("!!!", &[]).await;
    assert_eq!(gathered.corpus, INSUFFICIENT_EVIDENCE);
    assert!(gathered.warnings.is_empty());
}

#[tokio::test]
async fn encyclopedia_summary_is_labeled_and_memoized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/rest.php/v1/search/title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pages": [{"title": "Acme"}]
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "extract": "Acme is a company."
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client().with_wiki_base(server.uri());
    let first = client.encyclopedia_summary("Acme").await;
    assert!(first.contains("[WIKIPEDIA:ko/Acme]\nAcme is a company."));
    assert!(first.contains("[WIKIPEDIA:en/Acme]\nAcme is a company."));

    // Second call must hit the cache; the expect(2) counts above verify
    // no further requests were made.
    let second = client.encyclopedia_summary("Acme").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn encyclopedia_summary_empty_when_both_locales_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client().with_wiki_base(server.uri());
    assert_eq!(client.encyclopedia_summary("Nowhere").await, "");
}

#[tokio::test]
async fn guess_skips_empty_slug() {
    let client = test_client();
    let picked = client.guess_brand_sources("!!!", &[]).await;
    assert!(picked.is_empty());
}

#[derive(Debug)]
struct ChainedError {
    msg: &'static str,
    source: Option<Box<ChainedError>>,
}

impl std::fmt::Display for ChainedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.msg)
    }
}

impl std::error::Error for ChainedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

fn chain(outer: &'static str, inner: &'static str) -> ChainedError {
    ChainedError {
        msg: outer,
        source: Some(Box::new(ChainedError {
            msg: inner,
            source: None,
        })),
    }
}

#[test]
fn tls_error_detected_anywhere_in_chain() {
    // rustls surfaces the certificate failure as a nested source.
    let err = chain(
        "error sending request",
        "invalid peer certificate: UnknownIssuer",
    );
    assert!(is_tls_error(&err));
}

#[test]
fn tls_error_detection_is_case_insensitive() {
    let err = ChainedError {
        msg: "TLS handshake failed",
        source: None,
    };
    assert!(is_tls_error(&err));
    let err = ChainedError {
        msg: "SSL routines: wrong version number",
        source: None,
    };
    assert!(is_tls_error(&err));
}

#[test]
fn plain_connection_errors_are_not_tls() {
    let err = chain("error sending request", "connection refused");
    assert!(!is_tls_error(&err));
    let err = ChainedError {
        msg: "operation timed out",
        source: None,
    };
    assert!(!is_tls_error(&err));
}
