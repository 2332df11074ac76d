//! Text rendering of the grouped result table.

pub mod text;

pub use text::{render, write_table};
