//! Factory construction, invocation, and discrimination.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldspec::{Factory, is_factory};
use static_assertions::assert_impl_all;

// Factories are shared by reference across concurrent readers.
assert_impl_all!(Factory<String>: Send, Sync, Clone);
assert_impl_all!(Factory<Vec<u8>>: Send, Sync);

#[test]
fn construction_does_not_invoke_the_callee() {
    fieldspec_testhelpers::setup();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let factory = Factory::new(move || counter.fetch_add(1, Ordering::SeqCst));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // Invocation is deferred entirely to create().
    assert_eq!(factory.create(), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn create_reinvokes_on_every_call() {
    fieldspec_testhelpers::setup();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let factory = Factory::new(move || counter.fetch_add(1, Ordering::SeqCst));

    assert_eq!(factory.create(), 0);
    assert_eq!(factory.create(), 1);
    assert_eq!(factory.create(), 2);
}

#[test]
fn create_yields_distinct_instances() {
    fieldspec_testhelpers::setup();

    let lists = Factory::new(Vec::<u32>::new);
    let mut a = lists.create();
    let b = lists.create();
    a.push(42);
    assert_eq!(a, vec![42]);
    assert!(b.is_empty(), "instances must not share storage");
}

#[test]
fn clone_shares_the_callee() {
    fieldspec_testhelpers::setup();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let factory = Factory::new(move || counter.fetch_add(1, Ordering::SeqCst));
    let other = factory.clone();

    factory.create();
    other.create();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn is_factory_discriminates_by_type_identity() {
    fieldspec_testhelpers::setup();

    let factory = Factory::new(Vec::<u32>::new);
    assert!(is_factory::<Vec<u32>>(&factory));

    // Arbitrary values, including strings, are not factories.
    assert!(!is_factory::<Vec<u32>>(&"NOT IT"));
    assert!(!is_factory::<Vec<u32>>(&0u64));

    // The check is exact in the produced type.
    assert!(!is_factory::<u8>(&factory));
}

#[test]
#[should_panic(expected = "boom")]
fn callee_panics_surface_unmodified() {
    let factory = Factory::new(|| -> u32 { panic!("boom") });
    factory.create();
}

#[test]
fn create_is_safe_to_call_concurrently() {
    fieldspec_testhelpers::setup();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let factory = Factory::new(move || counter.fetch_add(1, Ordering::SeqCst));

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..100 {
                    factory.create();
                }
            });
        }
    });

    assert_eq!(calls.load(Ordering::SeqCst), 800);
}
