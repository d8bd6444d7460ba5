//! Locale-stable line sorting
//!
//! Sorts a batch of text lines lexicographically, or numerically after
//! extracting the leading integer, decimal-comma or decimal-dot value of each
//! line. Numeric parsing never depends on the host's regional settings, lines
//! without content are grouped at one end, and a line that cannot be parsed
//! aborts the sort with its index.
//!
//! ```
//! use linesort::{sort_lines, SortOrder, SortVariant};
//!
//! let lines: Vec<String> = ["10", "-3", "", "7"].iter().map(|s| s.to_string()).collect();
//! let sorted = sort_lines(&lines, SortVariant::Integer, SortOrder::Ascending).unwrap();
//! assert_eq!(sorted, ["", "-3", "7", "10"]);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;
pub mod locale;

// Sorters
pub mod sorter;
pub mod lexicographic;
pub mod numeric;
pub mod strategy;

pub mod input;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use config::{SortConfig, SortOrder, SortVariant};
pub use locale::NumericLocale;
pub use lexicographic::LexicographicSorter;
pub use numeric::{NumericSorter, NumericStrategy};
pub use sorter::{new_sorter, sort_lines, LineSorter};
pub use strategy::{
    DecimalCommaSorter, DecimalCommaStrategy, DecimalDotSorter, DecimalDotStrategy, IntegerSorter,
    IntegerStrategy,
};

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

