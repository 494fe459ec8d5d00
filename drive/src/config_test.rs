use super::*;

#[test]
fn new_trims_whitespace_and_trailing_slashes() {
    let config = ApiConfig::new("  https://drive.example.com/api//  ").unwrap();
    assert_eq!(config.base_url, "https://drive.example.com/api");
}

#[test]
fn new_accepts_plain_http() {
    let config = ApiConfig::new("http://127.0.0.1:3000/api").unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:3000/api");
}

#[test]
fn new_rejects_empty() {
    assert_eq!(ApiConfig::new("   "), Err(ConfigError::EmptyBaseUrl));
    assert_eq!(ApiConfig::new("/"), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn new_rejects_non_http_scheme() {
    assert_eq!(
        ApiConfig::new("ftp://files.example.com"),
        Err(ConfigError::InvalidScheme("ftp://files.example.com".to_owned()))
    );
}

#[test]
fn default_uses_local_backend() {
    assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE_URL);
    assert!(ApiConfig::new(DEFAULT_API_BASE_URL).is_ok());
}
