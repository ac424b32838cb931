use serde::{Deserialize, Serialize};

/// What `remove_observer` does when asked to remove a handle that is not registered
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingObserver {
    /// Leave the registry alone and report nothing
    #[default]
    Ignore,
    /// Leave the registry alone and return `ObserverError::NotFound`
    Error,
}

/// Behavioural knobs for a [`Subject`](crate::Subject)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectConfig {
    pub missing_observer: MissingObserver,
    /// When false, adding a handle that is already registered is a no-op
    pub allow_duplicates: bool,
}

impl Default for SubjectConfig {
    fn default() -> Self { Self { missing_observer: MissingObserver::Ignore, allow_duplicates: true } }
}

impl SubjectConfig {
    pub fn with_missing_observer(mut self, missing_observer: MissingObserver) -> Self {
        self.missing_observer = missing_observer;
        self
    }

    pub fn with_allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = allow_duplicates;
        self
    }
}
