use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error("Car model cannot be empty")]
    EmptyModel,
    #[error("Invalid year {0:?}")]
    InvalidYear(String),
    #[error("Invalid price {0:?}")]
    InvalidPrice(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BasketError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Invalid price {0} - must be finite and not negative")]
    InvalidPrice(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SingletonError {
    #[error("{name} is already initialized")]
    AlreadyInitialized { name: &'static str },
    #[error("{name} has not been initialized")]
    Uninitialized { name: &'static str },
}
