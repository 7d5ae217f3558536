use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording(channel: &SessionChannel) -> (Rc<RefCell<Vec<SessionState>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let sub = channel.subscribe(Box::new(move |state| sink.borrow_mut().push(state)));
    (seen, sub)
}

fn signed_in(id: &str) -> SessionState {
    SessionState::Authenticated {
        identity_id: id.to_owned(),
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_unknown() {
    assert_eq!(SessionState::default(), SessionState::Unknown);
    assert!(!SessionState::default().is_resolved());
}

#[test]
fn identity_id_only_for_authenticated() {
    assert_eq!(signed_in("u1").identity_id(), Some("u1"));
    assert_eq!(SessionState::Anonymous.identity_id(), None);
}

#[test]
fn session_error_converts_to_errored_state() {
    let state = SessionState::from(SessionError::Resolution("timeout".to_owned()));
    assert_eq!(
        state,
        SessionState::Errored {
            cause: "session resolution failed: timeout".to_owned()
        }
    );
}

#[test]
fn state_serializes_with_status_tag() {
    let json = serde_json::to_value(signed_in("u1")).unwrap();
    assert_eq!(json["status"], "authenticated");
    assert_eq!(json["identity_id"], "u1");
}

// =============================================================
// Lifecycle rules
// =============================================================

#[test]
fn nothing_returns_to_unknown() {
    for from in [
        SessionStateKind::Authenticated,
        SessionStateKind::Anonymous,
        SessionStateKind::Errored,
    ] {
        assert!(!from.can_transition_to(SessionStateKind::Unknown));
    }
}

#[test]
fn errored_is_terminal() {
    for to in [SessionStateKind::Authenticated, SessionStateKind::Anonymous] {
        assert!(!SessionStateKind::Errored.can_transition_to(to));
    }
}

#[test]
fn sign_in_and_sign_out_are_allowed() {
    assert!(SessionStateKind::Anonymous.can_transition_to(SessionStateKind::Authenticated));
    assert!(SessionStateKind::Authenticated.can_transition_to(SessionStateKind::Anonymous));
}

// =============================================================
// SessionChannel
// =============================================================

#[test]
fn subscribe_delivers_current_state_synchronously() {
    let channel = SessionChannel::new();
    let (seen, _sub) = recording(&channel);
    assert_eq!(*seen.borrow(), vec![SessionState::Unknown]);
}

#[test]
fn publish_fans_out_to_all_subscribers() {
    let channel = SessionChannel::new();
    let (a, _sub_a) = recording(&channel);
    let (b, _sub_b) = recording(&channel);

    channel.publish(SessionState::Anonymous).unwrap();

    assert_eq!(a.borrow().last(), Some(&SessionState::Anonymous));
    assert_eq!(b.borrow().last(), Some(&SessionState::Anonymous));
    assert_eq!(channel.current(), SessionState::Anonymous);
}

#[test]
fn publishing_same_state_is_silent() {
    let channel = SessionChannel::new();
    let (seen, _sub) = recording(&channel);
    channel.publish(SessionState::Anonymous).unwrap();
    channel.publish(SessionState::Anonymous).unwrap();
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn invalid_transition_is_rejected_and_state_kept() {
    let channel = SessionChannel::new();
    channel.publish(signed_in("u1")).unwrap();

    let err = channel.publish(SessionState::Unknown).unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidTransition {
            from: SessionStateKind::Authenticated,
            to: SessionStateKind::Unknown,
        }
    );
    assert_eq!(err.to_string(), "invalid session transition: authenticated -> unknown");
    assert_eq!(channel.current(), signed_in("u1"));
}

#[test]
fn no_callback_after_unsubscribe() {
    let channel = SessionChannel::new();
    let (seen, mut sub) = recording(&channel);
    sub.unsubscribe();
    assert_eq!(channel.subscriber_count(), 0);

    channel.publish(SessionState::Anonymous).unwrap();
    assert_eq!(*seen.borrow(), vec![SessionState::Unknown]);
}

#[test]
fn subscriber_released_mid_publish_is_not_called() {
    let channel = SessionChannel::new();
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let killer = victim.clone();
    let _first = channel.subscribe(Box::new(move |state| {
        if state == SessionState::Anonymous {
            if let Some(mut sub) = killer.borrow_mut().take() {
                sub.unsubscribe();
            }
        }
    }));
    let (seen, second) = recording(&channel);
    *victim.borrow_mut() = Some(second);

    channel.publish(SessionState::Anonymous).unwrap();

    assert_eq!(*seen.borrow(), vec![SessionState::Unknown]);
    assert_eq!(channel.subscriber_count(), 1);
}

#[test]
fn dropping_channel_before_subscription_is_harmless() {
    let channel = SessionChannel::new();
    let (_seen, sub) = recording(&channel);
    drop(channel);
    drop(sub);
}

#[test]
fn sign_out_publishes_anonymous() {
    let channel = SessionChannel::new();
    channel.publish(signed_in("u1")).unwrap();
    let (seen, _sub) = recording(&channel);

    futures::executor::block_on(channel.sign_out()).unwrap();

    assert_eq!(seen.borrow().last(), Some(&SessionState::Anonymous));
}

#[test]
fn sign_out_from_errored_reports_failure() {
    let channel = SessionChannel::new();
    channel
        .publish(SessionState::Errored {
            cause: "down".to_owned(),
        })
        .unwrap();

    let err = futures::executor::block_on(channel.sign_out()).unwrap_err();
    assert!(matches!(err, SessionError::SignOut(_)));
}
