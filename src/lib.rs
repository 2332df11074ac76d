//! Summarize raytracer benchmark runs from render logs.
//!
//! [`log`] pulls (version, job, seconds) records out of mixed log text,
//! [`model`] groups them by (version, job) in first-seen order, and
//! [`render`] prints one tab-separated line per group.

pub mod log;
pub mod model;
pub mod render;

pub type Result<T> = anyhow::Result<T>;
