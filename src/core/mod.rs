//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The in-memory table model
//! - Error model and exit codes
//! - Text decoding
//! - Summary rendering
//! - Path matching utilities

pub mod encoding;
pub mod error;
pub mod paths;
pub mod render;
pub mod table;
