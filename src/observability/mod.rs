//! Observability subsystem for musterscan
//!
//! Structured, synchronous logging for the CLI surface. The decoder core
//! itself never logs: it is a pure function and stays side-effect-free.
//!
//! # Principles
//!
//! 1. One log line = one event
//! 2. Deterministic key ordering (alphabetical)
//! 3. Synchronous, no buffering
//! 4. No timestamps; output depends only on the event

mod logger;

pub use logger::{Logger, Severity};
