//! Utility modules for the permission engine
//!
//! ## Module Organization
//!
//! - **error**: Error handling and the crate-wide `Result` alias
//! - **logging**: Structured logging setup

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use logging::init_logging;
