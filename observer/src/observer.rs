use std::sync::Arc;

mod callback_observer;
pub use callback_observer::*;

/// Something that wants to hear about changes to a subject's state
pub trait Observer<C>: Send + Sync {
    /// Called once per notification with the subject's context value
    fn update(&self, context: &C);
}

/// An identifier for a registered observer, derived from the handle's address.
/// Only meaningful while at least one clone of the handle is alive.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl From<ObserverId> for usize {
    fn from(id: ObserverId) -> Self { id.0 }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:#x}", self.0) }
}

/// An opaque, cheaply clonable reference to an observer.
///
/// Two handles are equal only if they are clones of the same handle. Wrapping the same
/// observer value twice produces two distinct handles.
pub struct ObserverHandle<C>(Arc<dyn Observer<C>>);

impl<C> Clone for ObserverHandle<C> {
    fn clone(&self) -> Self { Self(Arc::clone(&self.0)) }
}

impl<C> ObserverHandle<C> {
    /// Wrap an observer value in a new handle
    pub fn new<O>(observer: O) -> Self
    where O: Observer<C> + 'static {
        Self(Arc::new(observer))
    }

    /// Wrap an already shared observer. The handle shares the allocation, so handles made
    /// from clones of the same `Arc` compare equal.
    pub fn from_arc<O>(observer: Arc<O>) -> Self
    where O: Observer<C> + 'static {
        Self(observer)
    }

    pub fn id(&self) -> ObserverId { ObserverId(Arc::as_ptr(&self.0) as *const () as usize) }

    /// Reference equality
    pub fn ptr_eq(&self, other: &Self) -> bool { self.id() == other.id() }

    /// Deliver a context value to the underlying observer
    pub fn update(&self, context: &C) { self.0.update(context) }
}

impl<C> PartialEq for ObserverHandle<C> {
    fn eq(&self, other: &Self) -> bool { self.ptr_eq(other) }
}
impl<C> Eq for ObserverHandle<C> {}

impl<C> std::fmt::Debug for ObserverHandle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_tuple("ObserverHandle").field(&self.id()).finish() }
}

/// Trait for types that can be turned into an observer handle
pub trait IntoObserverHandle<C> {
    fn into_observer_handle(self) -> ObserverHandle<C>;
}

impl<C> IntoObserverHandle<C> for ObserverHandle<C> {
    fn into_observer_handle(self) -> ObserverHandle<C> { self }
}

impl<C, O> IntoObserverHandle<C> for Arc<O>
where O: Observer<C> + 'static
{
    fn into_observer_handle(self) -> ObserverHandle<C> { ObserverHandle::from_arc(self) }
}

impl<C: 'static> IntoObserverHandle<C> for CallbackObserver<C> {
    fn into_observer_handle(self) -> ObserverHandle<C> { ObserverHandle::new(self) }
}

// Closures
impl<C, F> IntoObserverHandle<C> for F
where
    C: 'static,
    F: Fn(&C) + Send + Sync + 'static,
{
    fn into_observer_handle(self) -> ObserverHandle<C> { ObserverHandle::new(CallbackObserver::new(self)) }
}

impl<C> IntoObserverHandle<C> for std::sync::mpsc::Sender<C>
where C: Clone + Send + 'static
{
    fn into_observer_handle(self) -> ObserverHandle<C> {
        ObserverHandle::new(CallbackObserver::new(move |context: &C| {
            let _ = self.send(context.clone()); // Ignore send errors
        }))
    }
}

#[cfg(feature = "tokio")]
impl<C> IntoObserverHandle<C> for tokio::sync::mpsc::UnboundedSender<C>
where C: Clone + Send + 'static
{
    fn into_observer_handle(self) -> ObserverHandle<C> {
        ObserverHandle::new(CallbackObserver::new(move |context: &C| {
            let _ = self.send(context.clone()); // Ignore send errors
        }))
    }
}
