#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    shapeshift_test_support::logging::init();
}

/// Assert the problem+json contract on a test-service response.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) {
    let status = StatusCode::from_u16(expected_status).expect("valid status code");
    shapeshift_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        expected_code,
        status,
        expected_detail_contains,
    )
    .await;
}
