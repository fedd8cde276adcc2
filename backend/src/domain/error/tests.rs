//! Tests for domain error construction and serialisation.

use rstest::rstest;
use serde_json::json;

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn new_substitutes_a_message_for_blank_input() {
    let error = Error::new(ErrorCode::InternalError, "");
    assert_eq!(error.message(), "unspecified error");
}

#[rstest]
#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_without_empty_fields() {
    let error = Error::invalid_request("latitude out of range")
        .with_details(json!({ "field": "latitude" }));
    let value = serde_json::to_value(&error).expect("serialises");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "latitude out of range",
            "details": { "field": "latitude" }
        })
    );

    let traced = Error::not_found("gone").with_trace_id(TRACE_ID);
    let value = serde_json::to_value(&traced).expect("serialises");
    assert_eq!(value["traceId"], json!(TRACE_ID));
    assert!(value.get("details").is_none());
}
