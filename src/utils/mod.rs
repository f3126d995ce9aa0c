//! Utility modules for common functionality.
//!
//! Currently this holds the logging setup shared by the binary and tests.

pub mod logger;
