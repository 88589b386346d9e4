//! JotJot Core Library
//!
//! Core domain logic for the JotJot note tool: the jot model, near-duplicate
//! detection, merging, and the file-backed store the CLI works against.

pub mod advisor;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod merge;
pub mod note;
pub mod similarity;
pub mod store;
pub mod text;
