use ats_client::utils::id::{REQUEST_ID_LENGTH, request_id};
use std::collections::HashSet;

#[test]
fn test_request_id_format() {
    let id = request_id();
    assert_eq!(id.len(), REQUEST_ID_LENGTH);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_request_id_uniqueness() {
    let ids: HashSet<String> = (0..1000).map(|_| request_id()).collect();
    assert_eq!(ids.len(), 1000);
}
