//! Report generation for rating results
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal output with optional ANSI colors
//! - **JSON**: Machine-readable structured data
//!
//! Both operate on a slice of [`Rating`](crate::checks::Rating) values and write
//! into any `core::fmt::Write` sink, so callers decide where the text goes.

mod common;
mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
