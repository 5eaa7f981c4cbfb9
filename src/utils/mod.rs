//! Shared helpers with no knowledge of the server or its data.

pub mod date;
pub mod mime;
pub mod path;
mod plural;

pub use plural::plural_count;
