pub mod commands;
pub mod config;
pub mod engines;
pub mod error;
pub mod repl;
pub mod types;

pub use error::{NameGenError, Result};
