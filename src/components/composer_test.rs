use super::*;

// =============================================================
// Send failure alerts
// =============================================================

#[test]
fn rejected_send_alerts_endpoint_specific_message() {
    let err = ApiError::Rejected(400);
    assert_eq!(send_failure_alert(&err), "Failed to send message.");
}

#[test]
fn transport_failure_alerts_generic_message() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(send_failure_alert(&err), "An error occurred.");
}
