/// Base URL used when `ATS_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Path, relative to the base URL, of the token refresh endpoint
pub const REFRESH_PATH: &str = "auth/refresh";
/// Path of the login endpoint
pub const LOGIN_PATH: &str = "auth/login";
/// Path of the logout endpoint
pub const LOGOUT_PATH: &str = "auth/logout";
/// Path of the current-user endpoint
pub const ME_PATH: &str = "auth/me";
/// Route of the login view the presentation layer navigates to once the session is lost
pub const DEFAULT_LOGIN_ROUTE: &str = "/auth";
/// Storage key holding the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Capacity of the auth event broadcast channel
pub const AUTH_EVENT_CAPACITY: usize = 16;
/// User agent string used in HTTP requests to identify this client to the ATS API
pub const USER_AGENT: &str = "ats-client/0.1.0";
/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
