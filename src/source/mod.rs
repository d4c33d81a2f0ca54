pub mod reader;
pub mod rows;

pub use reader::{read_matches, read_matches_csv, REQUIRED_COLUMNS};
pub use rows::{parse_match_date, RawMatchRow};
