use ats_client::model::http::ApiRequest;
use reqwest::Method;
use serde_json::json;

#[test]
fn test_api_request_builders() {
    let request = ApiRequest::patch("/candidates/5")
        .with_json(&json!({"stage": "offer"}))
        .unwrap()
        .with_query("notify", "true")
        .with_header("X-Client", "dashboard")
        .unwrap();

    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.path, "/candidates/5");
    assert_eq!(request.body, Some(json!({"stage": "offer"})));
    assert_eq!(
        request.query,
        vec![("notify".to_string(), "true".to_string())]
    );
    assert_eq!(request.headers.get("x-client").unwrap(), "dashboard");
    assert_eq!(request.bearer_token(), None);
}

#[test]
fn test_api_request_invalid_header_name() {
    let result = ApiRequest::get("/x").with_header("bad header", "v");
    assert!(result.is_err());
}

#[test]
fn test_api_request_ids_differ() {
    let a = ApiRequest::get("/x");
    let b = ApiRequest::get("/x");
    assert_ne!(a.request_id, b.request_id);
}
