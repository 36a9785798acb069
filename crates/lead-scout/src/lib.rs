//! Local business prospecting toolkit.
//!
//! Finds businesses for a niche and location, scores their websites against a fixed
//! rubric, and produces outreach copy, CSV exports, and redesign mockups.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
