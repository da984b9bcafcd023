//! Assembling expressions from mappings or bags of words

mod conflicts;
mod generator;

pub use conflicts::*;
pub use generator::*;
