//! CLI library components for the inhaler directory.

pub mod logging;
pub mod render;
