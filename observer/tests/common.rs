use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    // if LOG_LEVEL env var is set, use it
    let level = std::env::var("LOG_LEVEL").ok().and_then(|level| Level::from_str(&level).ok()).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).with_test_writer().try_init();
}

#[allow(unused)]
pub fn watcher<T: Clone + Send + Sync + 'static>() -> (Box<dyn Fn(&T) + Send + Sync>, Box<dyn Fn() -> Vec<T> + Send + Sync>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let accumulate = {
        let changes = changes.clone();
        Box::new(move |value: &T| {
            changes.lock().unwrap().push(value.clone());
        })
    };

    let check = Box::new(move || {
        let changes: Vec<T> = changes.lock().unwrap().drain(..).collect();
        changes
    });

    (accumulate, check)
}

/// Records which observer saw which context, in call order
#[allow(unused)]
pub fn call_log<T: Clone + Send + Sync + 'static>() -> (impl Fn(&'static str) -> Box<dyn Fn(&T) + Send + Sync>, impl Fn() -> Vec<(&'static str, T)>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let make = {
        let calls = calls.clone();
        move |name: &'static str| -> Box<dyn Fn(&T) + Send + Sync> {
            let calls = calls.clone();
            Box::new(move |value: &T| calls.lock().unwrap().push((name, value.clone())))
        }
    };
    let check = move || calls.lock().unwrap().drain(..).collect::<Vec<_>>();
    (make, check)
}
