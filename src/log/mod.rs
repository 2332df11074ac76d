//! Record extraction from raytracer benchmark logs.

pub mod parse;
pub mod pattern;
pub mod record;

pub use parse::{Records, extract_records, records_from_str};
pub use record::{Record, RecordKey};
