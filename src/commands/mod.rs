pub mod parser;
pub mod dispatch;
pub mod help;

pub use crate::types::{Command, Reply};
