//! Command-line interface module.

mod args;
pub mod scan;

pub use args::{Cli, Commands, ServeArgs};
