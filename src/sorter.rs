//! Common entry point for every sort variant

use crate::config::{SortOrder, SortVariant};
use crate::error::SortResult;
use crate::lexicographic::LexicographicSorter;
use crate::strategy::{DecimalCommaSorter, DecimalDotSorter, IntegerSorter};

/// A line sorter with a fixed variant and direction.
///
/// Implementations are pure: the input batch is never modified and nothing is
/// kept between calls, so one sorter can serve several threads.
pub trait LineSorter: Send + Sync {
    fn variant(&self) -> SortVariant;

    fn order(&self) -> SortOrder;

    /// Output order as indices into `lines`. On failure no order is produced.
    fn permutation(&self, lines: &[&str]) -> SortResult<Vec<usize>>;

    /// Sorted copy of `lines`
    fn sort(&self, lines: &[String]) -> SortResult<Vec<String>> {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let order = self.permutation(&refs)?;
        Ok(order.into_iter().map(|index| lines[index].clone()).collect())
    }
}

/// Build the sorter for a variant and direction
pub fn new_sorter(variant: SortVariant, order: SortOrder) -> Box<dyn LineSorter> {
    match variant {
        SortVariant::Lexicographic => Box::new(LexicographicSorter::new(order)),
        SortVariant::Integer => Box::new(IntegerSorter::integer(order)),
        SortVariant::DecimalComma => Box::new(DecimalCommaSorter::decimal_comma(order)),
        SortVariant::DecimalDot => Box::new(DecimalDotSorter::decimal_dot(order)),
    }
}

/// Sort a batch once with the given variant and direction
pub fn sort_lines(lines: &[String], variant: SortVariant, order: SortOrder) -> SortResult<Vec<String>> {
    new_sorter(variant, order).sort(lines)
}
