use tracing::debug;

use crate::{ObserverHandle, RegistryError};

/// An insertion-ordered list of observer handles.
///
/// Duplicates are allowed. Indices are only stable between mutations: removing an
/// element shifts everything after it down by one.
pub struct ObserverRegistry<C> {
    handles: Vec<ObserverHandle<C>>,
}

impl<C> Default for ObserverRegistry<C> {
    fn default() -> Self { Self::new() }
}

impl<C> Clone for ObserverRegistry<C> {
    fn clone(&self) -> Self { Self { handles: self.handles.clone() } }
}

impl<C> std::fmt::Debug for ObserverRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_list().entries(self.handles.iter().map(|h| h.id())).finish() }
}

impl<C> ObserverRegistry<C> {
    pub fn new() -> Self { Self { handles: Vec::new() } }

    /// Appends a handle and returns the new length
    pub fn add(&mut self, handle: ObserverHandle<C>) -> usize {
        debug!("registry add {} at index {}", handle.id(), self.handles.len());
        self.handles.push(handle);
        self.handles.len()
    }

    pub fn count(&self) -> usize { self.handles.len() }

    pub fn is_empty(&self) -> bool { self.handles.is_empty() }

    /// Returns the handle at `index`, or None if the index is out of range
    pub fn get(&self, index: usize) -> Option<&ObserverHandle<C>> { self.handles.get(index) }

    /// Like [`get`](Self::get), but reports an out of range index
    pub fn try_get(&self, index: usize) -> Result<&ObserverHandle<C>, RegistryError> {
        self.handles.get(index).ok_or(RegistryError::IndexOutOfRange { index, len: self.handles.len() })
    }

    /// Scans forward from `start_index` for the first handle identical to `handle`.
    /// A start index at or past the end finds nothing.
    pub fn index_of(&self, handle: &ObserverHandle<C>, start_index: usize) -> Option<usize> {
        self.handles.iter().enumerate().skip(start_index).find(|(_, h)| h.ptr_eq(handle)).map(|(i, _)| i)
    }

    pub fn contains(&self, handle: &ObserverHandle<C>) -> bool { self.index_of(handle, 0).is_some() }

    /// Removes and returns the handle at `index`, shifting later handles down by one.
    /// An out of range index leaves the registry untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<ObserverHandle<C>, RegistryError> {
        if index >= self.handles.len() {
            return Err(RegistryError::IndexOutOfRange { index, len: self.handles.len() });
        }
        let handle = self.handles.remove(index);
        debug!("registry remove {} from index {}", handle.id(), index);
        Ok(handle)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObserverHandle<C>> { self.handles.iter() }

    /// A copy of the current handles, detached from later mutations
    pub fn snapshot(&self) -> Vec<ObserverHandle<C>> { self.handles.clone() }

    pub fn clear(&mut self) { self.handles.clear() }
}

impl<'a, C> IntoIterator for &'a ObserverRegistry<C> {
    type Item = &'a ObserverHandle<C>;
    type IntoIter = std::slice::Iter<'a, ObserverHandle<C>>;
    fn into_iter(self) -> Self::IntoIter { self.handles.iter() }
}
