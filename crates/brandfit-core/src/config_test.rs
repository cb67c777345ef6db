use std::collections::HashMap;

use super::*;

fn lookup_from(map: &HashMap<String, String>) -> impl Fn(&str) -> Result<String, std::env::VarError> + '_ {
    move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
}

#[test]
fn env_var_credential_wins() {
    let mut env = HashMap::new();
    env.insert(API_KEY_VAR.to_string(), "from-env".to_string());
    let mut file = HashMap::new();
    file.insert(API_KEY_VAR.to_string(), "from-file".to_string());

    let cfg = build_config(lookup_from(&env), &file).unwrap();
    assert_eq!(cfg.api_key, "from-env");
}

#[test]
fn env_file_credential_is_fallback() {
    let env = HashMap::new();
    let mut file = HashMap::new();
    file.insert(API_KEY_VAR.to_string(), "from-file".to_string());

    let cfg = build_config(lookup_from(&env), &file).unwrap();
    assert_eq!(cfg.api_key, "from-file");
}

#[test]
fn missing_credential_is_fatal() {
    let env = HashMap::new();
    let file = HashMap::new();
    let err = build_config(lookup_from(&env), &file).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey), "got: {err:?}");
}

#[test]
fn blank_env_var_falls_through_to_file() {
    let mut env = HashMap::new();
    env.insert(API_KEY_VAR.to_string(), "   ".to_string());
    let mut file = HashMap::new();
    file.insert(API_KEY_VAR.to_string(), "from-file".to_string());

    let cfg = build_config(lookup_from(&env), &file).unwrap();
    assert_eq!(cfg.api_key, "from-file");
}

#[test]
fn defaults_applied_when_unset() {
    let mut env = HashMap::new();
    env.insert(API_KEY_VAR.to_string(), "k".to_string());

    let cfg = build_config(lookup_from(&env), &HashMap::new()).unwrap();
    assert_eq!(cfg.model, "gemini-2.5-flash");
    assert_eq!(cfg.fetch_timeout_secs, 20);
    assert_eq!(cfg.max_body_chars, 14000);
    assert!((cfg.dedupe.iou_threshold - 0.55).abs() < f64::EPSILON);
    assert!((cfg.dedupe.center_dist_threshold - 0.12).abs() < f64::EPSILON);
}

#[test]
fn invalid_numeric_override_is_rejected() {
    let mut env = HashMap::new();
    env.insert(API_KEY_VAR.to_string(), "k".to_string());
    env.insert(
        "BRANDFIT_FETCH_TIMEOUT_SECS".to_string(),
        "soon".to_string(),
    );

    let err = build_config(lookup_from(&env), &HashMap::new()).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BRANDFIT_FETCH_TIMEOUT_SECS"),
        "got: {err:?}"
    );
}

#[test]
fn parse_env_file_strips_quotes_and_comments() {
    let body = r#"
# comment line
GEMINI_API_KEY="abc123"
OTHER='single'
BARE=plain

not-a-pair
"#;
    let map = parse_env_file(body);
    assert_eq!(map.get("GEMINI_API_KEY").unwrap(), "abc123");
    assert_eq!(map.get("OTHER").unwrap(), "single");
    assert_eq!(map.get("BARE").unwrap(), "plain");
    assert_eq!(map.len(), 3);
}

#[test]
fn parse_env_file_keeps_equals_in_value() {
    let map = parse_env_file("KEY=a=b=c");
    assert_eq!(map.get("KEY").unwrap(), "a=b=c");
}
