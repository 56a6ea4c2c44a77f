//! Utility modules for emoji-fetch
//!
//! - `files`: directory management and existence checks
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
