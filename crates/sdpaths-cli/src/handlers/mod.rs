//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Resolve anchors from the global flags
//! 2. Call into `sdpaths-core`
//! 3. Format output for the terminal
//!
//! Rendering lives in plain functions returning `String` so it can be tested
//! without capturing stdout.

pub mod locate;
pub mod paths;
pub mod provision;
