//! Line matchers for the raytracer benchmark log.
//!
//! Header line (starts a run):
//! === ./rust-raytracer-1.0 sphere ===
//!
//! Timing line (ends a run; the timestamp is ignored, seconds are captured):
//! Render done at 1418394912 (5s)...

use crate::Result;
use anyhow::Context;
use regex::Regex;

// Both are matched against the trimmed line and anchored at its start only.
const HEADER_RE: &str = r"^=== \./rust-raytracer-(\S+) (\S+) ===";
// ASCII digits only, so every captured duration parses.
const TIMING_RE: &str = r"^Render done at [0-9]+ \(([0-9]+)s\)\.\.\.";

/// Compiled header and timing patterns.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    header: Regex,
    timing: Regex,
}

impl LineMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(HEADER_RE).context("compile header pattern")?,
            timing: Regex::new(TIMING_RE).context("compile timing pattern")?,
        })
    }

    /// Returns (version, job) if `line` is a header line.
    pub fn header<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.header.captures(line.trim())?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    /// Returns the raw seconds digits if `line` is a timing line.
    ///
    /// Parsing is left to the caller so an out-of-range value can be reported
    /// with the line number.
    pub fn timing<'a>(&self, line: &'a str) -> Option<&'a str> {
        let caps = self.timing.captures(line.trim())?;
        Some(caps.get(1)?.as_str())
    }
}
