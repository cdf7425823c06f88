pub mod errors;
pub mod merge;
pub mod social;

pub use errors::*;
