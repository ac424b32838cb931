use std::sync::OnceLock;

use tracing::debug;

use crate::SingletonError;

/// A process-wide value with one explicit initialisation point.
///
/// Unlike a lazily created instance, nothing is constructed behind the caller's back:
/// [`init`](Self::init) must be called exactly once, and [`get`](Self::get) fails until it has been.
/// Prefer constructing a value and passing it down; reach for this only when that is impractical.
///
/// ```
/// use patterns_idioms::Global;
///
/// static SETTINGS: Global<String> = Global::new("settings");
///
/// assert!(SETTINGS.get().is_err());
/// SETTINGS.init("dark mode".to_string()).unwrap();
/// assert_eq!(SETTINGS.get().unwrap(), "dark mode");
/// assert!(SETTINGS.init("light mode".to_string()).is_err());
/// ```
pub struct Global<T> {
    name: &'static str,
    cell: OnceLock<T>,
}

impl<T> Global<T> {
    pub const fn new(name: &'static str) -> Self { Self { name, cell: OnceLock::new() } }

    pub fn name(&self) -> &'static str { self.name }

    /// Sets the value. Fails if it was already set, leaving the first value in place.
    pub fn init(&self, value: T) -> Result<&T, SingletonError> {
        self.cell.set(value).map_err(|_| SingletonError::AlreadyInitialized { name: self.name })?;
        debug!("{} initialized", self.name);
        self.get()
    }

    pub fn get(&self) -> Result<&T, SingletonError> { self.cell.get().ok_or(SingletonError::Uninitialized { name: self.name }) }

    pub fn is_initialized(&self) -> bool { self.cell.get().is_some() }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Global<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Global").field("name", &self.name).field("value", &self.cell.get()).finish()
    }
}
