//! Type definitions for vacstat

mod error;
mod vacancy;

pub use error::*;
pub use vacancy::*;
