use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: None,
        email: None,
    }
}

// =============================================================
// Lookup mapping
// =============================================================

#[test]
fn found_user_is_authenticated() {
    assert_eq!(
        session_from_lookup(Ok(Some(user("rider-1")))),
        SessionState::Authenticated {
            identity_id: "rider-1".to_owned()
        }
    );
}

#[test]
fn no_user_is_anonymous() {
    assert_eq!(session_from_lookup(Ok(None)), SessionState::Anonymous);
}

#[test]
fn lookup_failure_is_errored() {
    let state = session_from_lookup(Err("session lookup failed: 500".to_owned()));
    assert!(matches!(state, SessionState::Errored { ref cause } if cause.contains("500")));
}

// =============================================================
// Provider
// =============================================================

#[test]
fn subscribe_delivers_unknown_before_resolution() {
    let provider = HttpSessionProvider::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = provider.subscribe(Box::new(move |s| sink.borrow_mut().push(s)));
    assert_eq!(*seen.borrow(), vec![SessionState::Unknown]);
}

#[test]
fn apply_publishes_to_subscribers() {
    let provider = HttpSessionProvider::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = provider.subscribe(Box::new(move |s| sink.borrow_mut().push(s)));

    provider.apply(SessionState::Anonymous);
    assert_eq!(seen.borrow().last(), Some(&SessionState::Anonymous));
    assert_eq!(provider.current(), SessionState::Anonymous);
}

#[test]
fn apply_ignores_invalid_transition() {
    let provider = HttpSessionProvider::new();
    provider.apply(SessionState::Anonymous);
    provider.apply(SessionState::Unknown);
    assert_eq!(provider.current(), SessionState::Anonymous);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn refresh_on_server_marks_session_errored() {
    let provider = HttpSessionProvider::new();
    futures::executor::block_on(provider.refresh());
    assert!(matches!(provider.current(), SessionState::Errored { .. }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn sign_out_failure_keeps_session() {
    let provider = HttpSessionProvider::new();
    provider.apply(SessionState::Authenticated {
        identity_id: "rider-1".to_owned(),
    });
    let result = futures::executor::block_on(provider.sign_out());
    assert!(matches!(result, Err(SessionError::SignOut(_))));
    assert!(matches!(provider.current(), SessionState::Authenticated { .. }));
}
