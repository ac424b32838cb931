//! A line driven stand-in for a page of checkboxes: one control checkbox acting as the
//! subject, any number of checkbox observers mirroring it, plus a car form and a basket.

pub mod app;
pub mod checkbox;
pub mod command;
pub mod config;

pub use app::{App, Outcome};
pub use checkbox::{Checkbox, ControlCheckbox};
pub use command::{Command, CommandError};
pub use config::{ConfigError, log_level, subject_config};
