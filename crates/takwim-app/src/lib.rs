//! HTTP front end of the Takwim calendar generator.

pub mod app;
pub mod config;
pub mod engine_handler;
pub mod error;
