//! shapes2d - 2D shape model
//!
//! Library half of the `shapes2d` binary: configuration loading and the demo
//! driver. The shapes themselves live in `shapes2d_core`.

pub mod config;
pub mod demo;
