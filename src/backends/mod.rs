//! Backends module - The pipeline stages
//!
//! - resolve: Locating the dataset file on disk
//! - load: Decoding and parsing CSV into a table
//! - snapshot: Writing the loaded table to a binary file

pub mod load;
pub mod resolve;
pub mod snapshot;
