use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::{IntoObserverHandle, ObserverError, ObserverHandle, Subject, SubjectConfig};

/// A [`Subject`] behind a lock, for sharing between owners or threads.
///
/// Cloning shares the same subject. `notify` snapshots the registry and releases the lock
/// before calling any observer, so observers may add or remove observers (themselves
/// included) while being notified. Such changes apply from the next notification on.
pub struct SharedSubject<C>(Arc<RwLock<Subject<C>>>);

impl<C> Clone for SharedSubject<C> {
    fn clone(&self) -> Self { Self(Arc::clone(&self.0)) }
}

impl<C> Default for SharedSubject<C> {
    fn default() -> Self { Self::new() }
}

impl<C> From<Subject<C>> for SharedSubject<C> {
    fn from(subject: Subject<C>) -> Self { Self(Arc::new(RwLock::new(subject))) }
}

impl<C> std::fmt::Debug for SharedSubject<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.try_read() {
            Ok(subject) => f.debug_tuple("SharedSubject").field(&*subject).finish(),
            Err(_) => f.debug_tuple("SharedSubject").field(&"<locked>").finish(),
        }
    }
}

impl<C> SharedSubject<C> {
    pub fn new() -> Self { Subject::new().into() }

    pub fn with_config(config: SubjectConfig) -> Self { Subject::with_config(config).into() }

    fn read(&self) -> Result<RwLockReadGuard<'_, Subject<C>>, ObserverError> { Ok(self.0.read()?) }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Subject<C>>, ObserverError> { Ok(self.0.write()?) }

    pub fn observer_count(&self) -> Result<usize, ObserverError> { Ok(self.read()?.observer_count()) }

    pub fn add_observer(&self, handle: ObserverHandle<C>) -> Result<usize, ObserverError> { Ok(self.write()?.add_observer(handle)) }

    pub fn subscribe<L>(&self, listener: L) -> Result<ObserverHandle<C>, ObserverError>
    where L: IntoObserverHandle<C> {
        Ok(self.write()?.subscribe(listener))
    }

    pub fn remove_observer(&self, handle: &ObserverHandle<C>) -> Result<Option<ObserverHandle<C>>, ObserverError> {
        self.write()?.remove_observer(handle)
    }

    /// Notifies the observers registered at the time of the call, in registration order
    pub fn notify(&self, context: &C) -> Result<usize, ObserverError> {
        // Clone the handles to avoid holding the lock during observer execution
        let observers = self.read()?.registry().snapshot();
        debug!("shared subject notifying {} observers", observers.len());
        for handle in &observers {
            handle.update(context);
        }
        Ok(observers.len())
    }

    /// Run a closure against the locked subject
    pub fn with<R>(&self, f: impl FnOnce(&Subject<C>) -> R) -> Result<R, ObserverError> { Ok(f(&*self.read()?)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_clones_share_the_subject() {
        let subject = SharedSubject::<u8>::new();
        let other = subject.clone();
        subject.subscribe(|_: &u8| {}).unwrap();

        assert_eq!(other.observer_count().unwrap(), 1);
    }

    #[test]
    fn test_observer_can_remove_itself_during_notify() {
        let subject = SharedSubject::<u8>::new();
        let calls = Arc::new(Mutex::new(0));

        let slot: Arc<Mutex<Option<ObserverHandle<u8>>>> = Arc::new(Mutex::new(None));
        let handle = {
            let subject = subject.clone();
            let slot = slot.clone();
            let calls = calls.clone();
            subject
                .clone()
                .subscribe(move |_: &u8| {
                    *calls.lock().unwrap() += 1;
                    if let Some(me) = slot.lock().unwrap().take() {
                        subject.remove_observer(&me).unwrap();
                    }
                })
                .unwrap()
        };
        *slot.lock().unwrap() = Some(handle);

        assert_eq!(subject.notify(&1).unwrap(), 1);
        assert_eq!(subject.observer_count().unwrap(), 0);
        assert_eq!(subject.notify(&2).unwrap(), 0);
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let subject = SharedSubject::<u8>::new();
        let other = subject.clone();
        let panicked = std::thread::spawn(move || {
            let _guard = other.0.write().unwrap();
            panic!("panic while holding the subject lock");
        })
        .join();
        assert!(panicked.is_err());

        assert_eq!(subject.observer_count(), Err(ObserverError::Poisoned));
        assert_eq!(subject.notify(&0), Err(ObserverError::Poisoned));
        assert_eq!(subject.subscribe(|_: &u8| {}).unwrap_err(), ObserverError::Poisoned);
        assert!(format!("{subject:?}").contains("<locked>"));
    }
}
