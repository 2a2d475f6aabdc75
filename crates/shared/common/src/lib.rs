//! Common utilities shared across the signup crates.
//!
//! This crate provides:
//! - Unified application error handling
//! - Form configuration loaded from the environment

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
