//! DetectionEngine - Main API for analysing scam reports
//!
//! The module is organized into:
//! - `engine`: Core DetectionEngine implementation
//! - `tests`: Unit tests (test-only)

mod engine;

pub use engine::DetectionEngine;

#[cfg(test)]
mod tests;
