//! Docbot Core - Domain types shared by the Docbot crates.

mod error;
mod types;

pub use error::{Error, Result};
pub use types::*;
