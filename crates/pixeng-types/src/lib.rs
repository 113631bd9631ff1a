//! Foundation types for pixeng.
//!
//! This crate contains the platform-agnostic types shared by all pixeng
//! crates: colors, input identifiers and edge state, configuration, and
//! error types.

pub mod color;
pub mod config;
pub mod error;
pub mod input;
