use tracing::{debug, warn};

use crate::{IntoObserverHandle, MissingObserver, ObserverError, ObserverHandle, ObserverRegistry, SubjectConfig};

/// A Subject owns a registry of observers and notifies all of them, in registration order,
/// whenever its owner calls [`notify`](Self::notify).
///
/// Mutation requires `&mut self`, so the registry can not change underneath an in-flight
/// notification. Wrap the subject in a [`SharedSubject`](crate::SharedSubject) to share it.
pub struct Subject<C> {
    observers: ObserverRegistry<C>,
    config: SubjectConfig,
}

impl<C> Default for Subject<C> {
    fn default() -> Self { Self::new() }
}

impl<C> std::fmt::Debug for Subject<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject").field("observers", &self.observers).field("config", &self.config).finish()
    }
}

impl<C> Subject<C> {
    pub fn new() -> Self { Self::with_config(SubjectConfig::default()) }

    pub fn with_config(config: SubjectConfig) -> Self { Self { observers: ObserverRegistry::new(), config } }

    pub fn config(&self) -> &SubjectConfig { &self.config }

    pub fn registry(&self) -> &ObserverRegistry<C> { &self.observers }

    pub fn observer_count(&self) -> usize { self.observers.count() }

    /// Registers a handle and returns the number of registered observers
    pub fn add_observer(&mut self, handle: ObserverHandle<C>) -> usize {
        if !self.config.allow_duplicates && self.observers.contains(&handle) {
            debug!("subject already has observer {}, not adding it again", handle.id());
            return self.observers.count();
        }
        self.observers.add(handle)
    }

    /// Converts a closure, channel sender or observer into a handle, registers it, and returns
    /// the handle so it can be removed later
    pub fn subscribe<L>(&mut self, listener: L) -> ObserverHandle<C>
    where L: IntoObserverHandle<C> {
        let handle = listener.into_observer_handle();
        self.add_observer(handle.clone());
        handle
    }

    /// Removes the first registration of `handle`.
    ///
    /// Only the matching handle is ever removed. When it is not registered the registry is
    /// left as is and the result depends on [`SubjectConfig::missing_observer`].
    pub fn remove_observer(&mut self, handle: &ObserverHandle<C>) -> Result<Option<ObserverHandle<C>>, ObserverError> {
        match self.observers.index_of(handle, 0) {
            Some(index) => Ok(Some(self.observers.remove_at(index)?)),
            None => match self.config.missing_observer {
                MissingObserver::Ignore => {
                    warn!("remove_observer: {} is not registered, ignoring", handle.id());
                    Ok(None)
                }
                MissingObserver::Error => Err(ObserverError::NotFound(handle.id())),
            },
        }
    }

    /// Calls `update(context)` on every registered observer in registration order, on the
    /// calling thread, and returns how many were called.
    ///
    /// `&self` means the registry can not change during the pass, so every observer sees the
    /// same registration list a snapshot would give.
    pub fn notify(&self, context: &C) -> usize {
        let count = self.observers.count();
        debug!("subject notifying {} observers", count);
        for handle in &self.observers {
            handle.update(context);
        }
        count
    }
}

/// Capability for types which hold a [`Subject`] as a named field.
///
/// Implementors only provide access to the field; the subject operations come for free.
pub trait Observable<C> {
    fn subject(&self) -> &Subject<C>;
    fn subject_mut(&mut self) -> &mut Subject<C>;

    fn add_observer(&mut self, handle: ObserverHandle<C>) -> usize { self.subject_mut().add_observer(handle) }

    fn remove_observer(&mut self, handle: &ObserverHandle<C>) -> Result<Option<ObserverHandle<C>>, ObserverError> {
        self.subject_mut().remove_observer(handle)
    }

    fn notify(&self, context: &C) -> usize { self.subject().notify(context) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(log: &Arc<Mutex<Vec<(&'static str, i32)>>>, name: &'static str) -> ObserverHandle<i32> {
        let log = log.clone();
        (move |value: &i32| log.lock().unwrap().push((name, *value))).into_observer_handle()
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subject = Subject::new();
        for name in ["A", "B", "C"] {
            subject.add_observer(recorder(&log, name));
        }

        assert_eq!(subject.notify(&5), 3);
        assert_eq!(*log.lock().unwrap(), [("A", 5), ("B", 5), ("C", 5)]);
    }

    #[test]
    fn test_remove_absent_observer_keeps_others() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subject = Subject::new();
        let a = recorder(&log, "A");
        let b = recorder(&log, "B");
        subject.add_observer(a.clone());
        subject.add_observer(b.clone());

        let stranger = recorder(&log, "X");
        assert_eq!(subject.remove_observer(&stranger), Ok(None));
        assert_eq!(subject.observer_count(), 2);
        assert_eq!(subject.registry().get(1), Some(&b));
    }

    #[test]
    fn test_remove_absent_observer_errors_when_configured() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subject = Subject::with_config(SubjectConfig::default().with_missing_observer(MissingObserver::Error));
        subject.add_observer(recorder(&log, "A"));

        let stranger = recorder(&log, "X");
        assert_eq!(subject.remove_observer(&stranger), Err(ObserverError::NotFound(stranger.id())));
        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn test_remove_takes_first_duplicate_only() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subject = Subject::new();
        let a = recorder(&log, "A");
        subject.add_observer(a.clone());
        subject.add_observer(a.clone());

        subject.notify(&1);
        assert_eq!(subject.remove_observer(&a), Ok(Some(a.clone())));
        subject.notify(&2);

        assert_eq!(*log.lock().unwrap(), [("A", 1), ("A", 1), ("A", 2)]);
    }

    #[test]
    fn test_duplicates_can_be_refused() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subject = Subject::with_config(SubjectConfig::default().with_allow_duplicates(false));
        let a = recorder(&log, "A");

        assert_eq!(subject.add_observer(a.clone()), 1);
        assert_eq!(subject.add_observer(a.clone()), 1);
        assert_eq!(subject.notify(&0), 1);
    }
}
