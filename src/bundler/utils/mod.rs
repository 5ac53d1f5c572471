//! Shared helpers for the release pipeline.

pub mod fs;
