//! descartes-square: weigh a decision with the four Descartes Square prompts.

pub mod config;
pub mod error;
pub mod locale;
pub mod projection;
pub mod report;
pub mod store;
pub mod tui;
pub mod types;

pub use error::{Error, Result};
