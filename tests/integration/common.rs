// Common utilities for integration tests

use ats_client::prelude::*;
use mockito::ServerGuard;
use std::sync::Arc;

/// Prefix every mocked route lives under
pub const API_PREFIX: &str = "/api/v1";

/// Route of the refresh endpoint on the mock server
pub fn refresh_route() -> String {
    format!("{API_PREFIX}/auth/refresh")
}

/// Route of an arbitrary protected resource on the mock server
pub fn route(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

/// Creates a client pointing at `server` over a memory store seeded with `entries`
pub fn create_test_client(
    server: &ServerGuard,
    entries: &[(&str, &str)],
) -> (Client, Arc<MemoryStore>) {
    setup_logger();
    let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
    let config = Config::with_base_url(&format!("{}{}", server.url(), API_PREFIX));
    let client = Client::new(config, store.clone()).expect("Failed to create client");
    (client, store)
}
