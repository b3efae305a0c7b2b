//! Parsers for free-text planner input.

mod parts;

pub use parts::{parse_number, parse_part_lengths, parse_part_lengths_from_file};
