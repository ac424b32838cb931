//! Small object idioms: a constructed value type ([`Car`]), a module with private state and a
//! public surface ([`Basket`]), and a process-wide value with an explicit initialisation point
//! ([`Global`]).

mod basket;
mod car;
mod error;
mod singleton;

pub use basket::*;
pub use car::*;
pub use error::*;
pub use singleton::*;
