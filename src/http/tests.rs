use crate::cli::tests::fake_args;
use crate::http::router;
use crate::map::locations::LocationPool;
use crate::{app_context, auth, view};
use axum_test::TestServer;
use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use http::{HeaderName, HeaderValue};

pub const PASSCODE_HEADER: HeaderName = HeaderName::from_static("passcode");

pub fn passcode_header(passcode: &str) -> HeaderValue {
    HeaderValue::from_str(passcode).expect("Failed to construct a passcode header.")
}

pub fn test_server() -> TestServer {
    test_server_with_locations(LocationPool::builtin())
}

pub fn test_server_with_locations(locations: LocationPool) -> TestServer {
    let args = fake_args();
    auth::init(&args).expect("Failed to initialize auth.");
    let view = view::init(&args).expect("Failed to initialize the view configuration.");
    let app_context = app_context::init(locations, view);
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}

#[tokio::test]
async fn test_allowed_origin_is_echoed() {
    let server = test_server();

    let response = server
        .get("/health/check")
        .add_header(ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:3000"))
    );
}

#[tokio::test]
async fn test_unknown_origin_is_not_allowed() {
    let server = test_server();

    let response = server
        .get("/health/check")
        .add_header(ORIGIN, HeaderValue::from_static("https://elsewhere.example"))
        .await;

    response.assert_status_ok();
    assert!(response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
