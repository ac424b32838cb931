use super::Observer;

/// A CallbackObserver wraps a closure which is called with the context value
/// whenever the subject it is registered with notifies.
pub struct CallbackObserver<C> {
    callback: Box<dyn Fn(&C) + Send + Sync>,
}

impl<C> CallbackObserver<C> {
    pub fn new<F>(callback: F) -> Self
    where F: Fn(&C) + Send + Sync + 'static {
        Self { callback: Box::new(callback) }
    }
}

impl<C> Observer<C> for CallbackObserver<C> {
    fn update(&self, context: &C) { (self.callback)(context) }
}

impl<C> std::fmt::Debug for CallbackObserver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("CallbackObserver").finish_non_exhaustive() }
}
