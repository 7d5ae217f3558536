use super::*;

#[test]
fn me_ok_is_signed_in() {
    assert_eq!(classify_me_status(200), MeStatus::SignedIn);
}

#[test]
fn me_unauthorized_and_forbidden_are_signed_out() {
    assert_eq!(classify_me_status(401), MeStatus::SignedOut);
    assert_eq!(classify_me_status(403), MeStatus::SignedOut);
}

#[test]
fn me_other_statuses_are_failures() {
    for status in [204, 404, 500, 502] {
        assert_eq!(classify_me_status(status), MeStatus::Failed, "status {status}");
    }
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("logout", 500), "logout failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_is_unavailable_on_server() {
    let result = futures::executor::block_on(logout());
    assert_eq!(result, Err("not available on server".to_owned()));
}
