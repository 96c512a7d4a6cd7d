//! Request and response types for the TradeScan REST API.

pub mod fees;
pub mod filters;
pub mod token;

// Re-export all types for convenience
pub use fees::*;
pub use filters::*;
pub use token::*;
