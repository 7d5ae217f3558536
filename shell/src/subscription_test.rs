use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn counting() -> (Rc<Cell<u32>>, Subscription) {
    let released = Rc::new(Cell::new(0));
    let counter = released.clone();
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    (released, sub)
}

#[test]
fn unsubscribe_runs_release_once() {
    let (released, mut sub) = counting();
    assert!(sub.is_active());
    sub.unsubscribe();
    sub.unsubscribe();
    assert_eq!(released.get(), 1);
    assert!(!sub.is_active());
}

#[test]
fn drop_releases_active_subscription() {
    let (released, sub) = counting();
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn drop_after_unsubscribe_does_not_release_again() {
    let (released, mut sub) = counting();
    sub.unsubscribe();
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn noop_subscription_is_inactive() {
    let mut sub = Subscription::noop();
    assert!(!sub.is_active());
    sub.unsubscribe();
}

#[test]
fn debug_reports_active_flag() {
    let (_released, sub) = counting();
    assert_eq!(format!("{sub:?}"), "Subscription { active: true }");
}
