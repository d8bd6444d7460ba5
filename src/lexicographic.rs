//! Ordinal comparison of whole lines

use crate::config::{SortOrder, SortVariant};
use crate::error::SortResult;
use crate::sorter::LineSorter;

/// Orders lines by their raw text (byte order, which is codepoint order for UTF-8)
#[derive(Debug, Clone, Copy)]
pub struct LexicographicSorter {
    order: SortOrder,
}

impl LexicographicSorter {
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }
}

impl LineSorter for LexicographicSorter {
    fn variant(&self) -> SortVariant {
        SortVariant::Lexicographic
    }

    fn order(&self) -> SortOrder {
        self.order
    }

    fn permutation(&self, lines: &[&str]) -> SortResult<Vec<usize>> {
        let mut indices: Vec<usize> = (0..lines.len()).collect();
        let descending = self.order.is_descending();
        indices.sort_by(|&a, &b| {
            let cmp = lines[a].cmp(lines[b]);
            if descending {
                cmp.reverse()
            } else {
                cmp
            }
        });
        Ok(indices)
    }
}
