use ats_client::application::config::Config;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 4] = [
    "ATS_API_URL",
    "ATS_API_TIMEOUT",
    "ATS_LOGIN_ROUTE",
    "ATS_TOKEN_FILE",
];

#[test]
fn test_config_from_environment() {
    unsafe {
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.rest_api.timeout, 30);
        assert_eq!(config.auth.login_route, "/auth");
        assert_eq!(config.auth.token_file, None);
        assert_eq!(
            config.rest_api.default_headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );

        env::set_var("ATS_API_URL", "https://ats.example.com/api/v1/");
        env::set_var("ATS_API_TIMEOUT", "5");
        env::set_var("ATS_LOGIN_ROUTE", "/login");
        env::set_var("ATS_TOKEN_FILE", "/tmp/ats/tokens.json");

        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "https://ats.example.com/api/v1");
        assert_eq!(config.rest_api.timeout, 5);
        assert_eq!(config.auth.login_route, "/login");
        assert_eq!(
            config.auth.token_file,
            Some(PathBuf::from("/tmp/ats/tokens.json"))
        );

        for var in VARS {
            env::remove_var(var);
        }
    }
}

#[test]
fn test_url_for_joins_paths() {
    let config = Config::with_base_url("http://localhost:8000/api/v1/");
    assert_eq!(
        config.url_for("/candidates"),
        "http://localhost:8000/api/v1/candidates"
    );
    assert_eq!(
        config.url_for("candidates/1"),
        "http://localhost:8000/api/v1/candidates/1"
    );
    assert_eq!(
        config.url_for("https://other.example.com/x"),
        "https://other.example.com/x"
    );
    assert_eq!(
        config.refresh_url(),
        "http://localhost:8000/api/v1/auth/refresh"
    );
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_base_url("http://localhost:8000/api/v1");
    let shown = config.to_string();
    let parsed: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(parsed["rest_api"]["base_url"], "http://localhost:8000/api/v1");
    assert_eq!(parsed["auth"]["refresh_path"], "auth/refresh");
}
