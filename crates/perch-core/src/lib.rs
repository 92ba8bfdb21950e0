#![forbid(unsafe_code)]

//! Core: viewport geometry and the logging facade shared by the Perch crates.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
