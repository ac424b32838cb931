/*!
Subject/observer primitives

A [`Subject`] keeps an ordered [`ObserverRegistry`] of [`ObserverHandle`]s and fans a
context value out to every one of them, synchronously and in registration order.

# Design requirements:
- Observers are object safe - a handle is an `Arc<dyn Observer<C>>`
- Handle identity is reference identity, never value equality
- Indices into the registry are only stable between mutations
- Removing an observer that was never registered must not touch anything else
- Single-threaded by default. Cross-thread use goes through [`SharedSubject`], whose lock is the precondition

# Basic usage

```rust
use patterns_observer::*;
use std::sync::{Arc, Mutex};

let seen = Arc::new(Mutex::new(Vec::new()));
let mut subject = Subject::new();

let a = {
    let seen = seen.clone();
    subject.subscribe(move |value: &bool| seen.lock().unwrap().push(("a", *value)))
};
let _b = {
    let seen = seen.clone();
    subject.subscribe(move |value: &bool| seen.lock().unwrap().push(("b", *value)))
};

assert_eq!(subject.notify(&true), 2);
subject.remove_observer(&a).unwrap();
assert_eq!(subject.notify(&false), 1);

assert_eq!(*seen.lock().unwrap(), [("a", true), ("b", true), ("b", false)]);
```

# Composition

Types that want subject behaviour hold a [`Subject`] as a named field and implement
[`Observable`], rather than having subject methods grafted onto them.

```rust
use patterns_observer::*;

struct Thermostat {
    celsius: i32,
    subject: Subject<i32>,
}

impl Observable<i32> for Thermostat {
    fn subject(&self) -> &Subject<i32> { &self.subject }
    fn subject_mut(&mut self) -> &mut Subject<i32> { &mut self.subject }
}

let mut thermostat = Thermostat { celsius: 20, subject: Subject::new() };
thermostat.add_observer(ObserverHandle::new(CallbackObserver::new(|c: &i32| println!("now {c}"))));
thermostat.celsius = 22;
thermostat.notify(&thermostat.celsius);
```
*/

mod config;
mod error;
mod observer;
mod registry;
mod shared;
mod subject;

pub use config::*;
pub use error::*;
pub use observer::*;
pub use registry::*;
pub use shared::*;
pub use subject::*;
