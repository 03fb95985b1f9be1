//! Shared configuration, errors and constants for the Takwim calendar generator.

pub mod config;
pub mod constants;
pub mod error;
