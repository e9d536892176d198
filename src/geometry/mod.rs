//! Geometry utilities for mesh2d.
//!
//! This module provides planar vector helpers, closed-form polygon measures
//! and per-node mesh size indicators.

pub mod metrics;
pub mod quality;

pub use metrics::Point2;
