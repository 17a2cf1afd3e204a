use ats_client::utils::logger::{parse_level, setup_logger};
use tracing::Level;

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(Some("debug")), Level::DEBUG);
    assert_eq!(parse_level(Some("WARN")), Level::WARN);
    assert_eq!(parse_level(Some("Error")), Level::ERROR);
    assert_eq!(parse_level(Some("trace")), Level::TRACE);
    assert_eq!(parse_level(Some("verbose")), Level::INFO);
    assert_eq!(parse_level(None), Level::INFO);
}

#[test]
fn test_setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
}
