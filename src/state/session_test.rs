use super::*;
use crate::net::types::SubscriptionStatus;

fn user(email: &str) -> UserRecord {
    UserRecord {
        id: 7,
        email: email.to_owned(),
        subscription_status: SubscriptionStatus::Free,
        trial_ends_at: None,
    }
}

#[test]
fn found_record_confirms_with_server_email() {
    let verdict = classify_lookup(Ok(user("current@b.com")));
    assert_eq!(verdict, SessionVerdict::Confirmed { email: "current@b.com".to_owned() });
}

#[test]
fn not_found_is_the_only_destructive_verdict() {
    assert_eq!(classify_lookup(Err(ApiError::NotFound)), SessionVerdict::NotFound);
}

#[test]
fn server_errors_are_indeterminate() {
    assert_eq!(classify_lookup(Err(ApiError::Status(500))), SessionVerdict::Indeterminate);
    assert_eq!(classify_lookup(Err(ApiError::Status(503))), SessionVerdict::Indeterminate);
}

#[test]
fn non_404_client_errors_are_indeterminate() {
    assert_eq!(classify_lookup(Err(ApiError::Status(401))), SessionVerdict::Indeterminate);
    assert_eq!(classify_lookup(Err(ApiError::Status(429))), SessionVerdict::Indeterminate);
}

#[test]
fn transport_failure_is_indeterminate() {
    let verdict = classify_lookup(Err(ApiError::Network("connection reset".to_owned())));
    assert_eq!(verdict, SessionVerdict::Indeterminate);
}

#[test]
fn undecodable_body_is_indeterminate() {
    let verdict = classify_lookup(Err(ApiError::Decode("missing field email".to_owned())));
    assert_eq!(verdict, SessionVerdict::Indeterminate);
}
