// Types describing DRS specifications and the results of checking against them

mod error;
mod issues;
mod report;
mod types;

// Re-export all public symbols
pub use error::*;
pub use issues::*;
pub use report::*;
pub use types::*;
