use thiserror::Error;

use crate::ObserverId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Index {index} is out of range for {len} registered observers")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Observer {0} is not registered")]
    NotFound(ObserverId),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Subject lock is poisoned")]
    Poisoned,
}

impl<T> From<std::sync::PoisonError<T>> for ObserverError {
    fn from(_: std::sync::PoisonError<T>) -> Self { ObserverError::Poisoned }
}
