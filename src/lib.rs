//! Toroidal Game of Life engine with a moving-average frame timer.
//!
//! [`Grid`] advances a fixed-size wraparound grid one generation at a time
//! using two preallocated buffers. [`MovingAverage`] aggregates frame times
//! over a fixed window. The [`app`] module wires both into a headless
//! benchmark that compares render strategies.

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod simulation;
pub mod stats;

pub use error::{Error, Result};
pub use simulation::{Cell, Grid};
pub use stats::MovingAverage;
