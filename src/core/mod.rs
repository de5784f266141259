//! Launcher building blocks: typed parameters and configuration, output
//! directory handling, and the timed external pipeline. Consumed by the
//! high-level `api` module.
pub mod output;
pub mod params;
pub mod pipeline;
