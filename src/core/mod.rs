//! Core splitting building blocks: split parameters, tool-name sanitization,
//! the in-memory document wrapper, and run partitioning. These are internal
//! primitives consumed by the high-level `api` module.
pub mod document;
pub mod params;
pub mod partition;
pub mod sanitize;
