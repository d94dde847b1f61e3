pub mod cli;
pub mod command;
pub mod error;
pub mod output;

pub use error::{Error, Result};
