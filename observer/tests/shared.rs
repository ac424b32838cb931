mod common;
use common::call_log;
use patterns_observer::*;
use std::sync::{Arc, Mutex};

#[test]
fn test_observer_added_during_notify_waits_for_next_pass() {
    let (make, check) = call_log::<u32>();
    let make = Arc::new(make);
    let subject = SharedSubject::new();

    let added = Arc::new(Mutex::new(false));
    {
        let inner = subject.clone();
        let make = make.clone();
        let added = added.clone();
        let first = make("first");
        subject
            .subscribe(move |value: &u32| {
                first(value);
                let mut added = added.lock().unwrap();
                if !*added {
                    *added = true;
                    inner.subscribe(make("late")).unwrap();
                }
            })
            .unwrap();
    }

    assert_eq!(subject.notify(&1).unwrap(), 1);
    assert_eq!(check(), [("first", 1)]);

    assert_eq!(subject.notify(&2).unwrap(), 2);
    assert_eq!(check(), [("first", 2), ("late", 2)]);
}

#[test]
fn test_shared_subject_across_threads() {
    let (make, check) = call_log::<usize>();
    let subject = SharedSubject::new();
    subject.subscribe(make("main")).unwrap();

    let worker = {
        let subject = subject.clone();
        std::thread::spawn(move || subject.notify(&7).unwrap())
    };
    assert_eq!(worker.join().unwrap(), 1);
    assert_eq!(check(), [("main", 7)]);
}

#[test]
fn test_missing_observer_error_through_shared_subject() {
    let subject = SharedSubject::<()>::with_config(SubjectConfig::default().with_missing_observer(MissingObserver::Error));
    let stranger = (|_: &()| {}).into_observer_handle();

    assert_eq!(subject.remove_observer(&stranger), Err(ObserverError::NotFound(stranger.id())));
    assert_eq!(subject.with(|s| s.config().missing_observer).unwrap(), MissingObserver::Error);
}
