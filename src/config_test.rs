use super::*;

#[test]
fn defaults_match_same_origin_setup() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "");
    assert_eq!(config.token_storage_key, "token");
    assert_eq!(config.notice_timeout, Duration::from_secs(5));
}

#[test]
fn from_values_without_overrides_equals_default() {
    assert_eq!(ClientConfig::from_values(None, None, None), ClientConfig::default());
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let config = ClientConfig::from_values(Some("http://localhost:8000/"), None, None);
    assert_eq!(config.api_base, "http://localhost:8000");
    assert_eq!(config.endpoint("/activities"), "http://localhost:8000/activities");
}

#[test]
fn blank_token_key_falls_back_to_default() {
    let config = ClientConfig::from_values(None, Some("   "), None);
    assert_eq!(config.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
}

#[test]
fn notice_secs_parses_and_rejects_zero_or_garbage() {
    assert_eq!(
        ClientConfig::from_values(None, None, Some("8")).notice_timeout,
        Duration::from_secs(8)
    );
    assert_eq!(
        ClientConfig::from_values(None, None, Some("0")).notice_timeout,
        Duration::from_secs(DEFAULT_NOTICE_TIMEOUT_SECS)
    );
    assert_eq!(
        ClientConfig::from_values(None, None, Some("soon")).notice_timeout,
        Duration::from_secs(DEFAULT_NOTICE_TIMEOUT_SECS)
    );
}

#[test]
fn endpoint_on_same_origin_is_just_the_path() {
    assert_eq!(ClientConfig::default().endpoint("/token"), "/token");
}
