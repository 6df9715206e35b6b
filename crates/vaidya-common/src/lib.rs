//! vaidya-common — Shared error types used across all Vaidya crates.

pub mod error;

pub use error::{Result, VaidyaError};
