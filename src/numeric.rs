//! Numeric line sorting
//!
//! Every line is reduced to a comparison key by a [`NumericStrategy`]: the
//! strategy keeps the leading run of characters it admits, normalises it, and
//! converts it with the fixed [`NumericLocale`]. Lines whose prepared text is
//! blank are "empty" and are moved as one block to the front (ascending) or
//! the back (descending), in their original order. The emitted lines are always
//! the original texts; only the keys are derived.

use std::borrow::Cow;
use std::cmp::Ordering;

use tracing::debug;

use crate::config::{SortOrder, SortVariant};
use crate::error::{SortError, SortResult};
use crate::locale::{is_blank, NumberError, NumericLocale, BLANKS};
use crate::sorter::LineSorter;

/// Per-variant behaviour plugged into [`NumericSorter`]
pub trait NumericStrategy: Send + Sync {
    /// Comparison key produced for a non-empty line
    type Value: PartialOrd + Copy + Send;

    /// Characters kept in addition to the blanks (space, tab, CR, LF)
    const ADMISSIBLE: &'static str;

    /// Variant implemented by this strategy
    const VARIANT: SortVariant;

    /// Reduce a raw line to the text handed to [`convert`](Self::convert).
    fn prepare<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(leading_admissible(line, Self::ADMISSIBLE))
    }

    /// Turn prepared, non-blank text into a key.
    fn convert(&self, prepared: &str, locale: &NumericLocale) -> Result<Self::Value, NumberError>;
}

/// Longest prefix of `line` made of blanks and characters from `admissible`.
///
/// A line whose admissible prefix is blank while more text follows carries no
/// extractable number; it is returned whole so that conversion rejects it
/// instead of it being taken for an empty line.
pub fn leading_admissible<'a>(line: &'a str, admissible: &str) -> &'a str {
    let end = line
        .char_indices()
        .find(|&(_, ch)| !BLANKS.contains(&ch) && !admissible.contains(ch))
        .map_or(line.len(), |(pos, _)| pos);

    let run = &line[..end];
    if end < line.len() && is_blank(run) {
        line
    } else {
        run
    }
}

/// Generic numeric sorter driven by a strategy value
#[derive(Debug, Clone)]
pub struct NumericSorter<S> {
    strategy: S,
    order: SortOrder,
    locale: NumericLocale,
}

impl<S: NumericStrategy> NumericSorter<S> {
    pub fn new(strategy: S, order: SortOrder) -> Self {
        Self {
            strategy,
            order,
            locale: NumericLocale::fixed(),
        }
    }

    /// Key for a single line; `Ok(None)` means the line is empty.
    pub fn key_of(&self, line: &str) -> Result<Option<S::Value>, NumberError> {
        let prepared = self.strategy.prepare(line);
        if is_blank(&prepared) {
            return Ok(None);
        }
        self.strategy.convert(&prepared, &self.locale).map(Some)
    }
}

impl<S: NumericStrategy> LineSorter for NumericSorter<S> {
    fn variant(&self) -> SortVariant {
        S::VARIANT
    }

    fn order(&self) -> SortOrder {
        self.order
    }

    fn permutation(&self, lines: &[&str]) -> SortResult<Vec<usize>> {
        let mut empties = Vec::new();
        let mut keyed: Vec<(usize, S::Value)> = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            match self.key_of(line) {
                Ok(None) => empties.push(index),
                Ok(Some(value)) => keyed.push((index, value)),
                Err(err) => {
                    debug!(index, variant = %S::VARIANT, %err, "line cannot be converted");
                    return Err(SortError::unparseable_line(index));
                }
            }
        }
        debug_assert_eq!(empties.len() + keyed.len(), lines.len());

        let descending = self.order.is_descending();
        // Stable: equal keys keep input order in both directions
        keyed.sort_by(|a, b| {
            let cmp = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
            if descending {
                cmp.reverse()
            } else {
                cmp
            }
        });

        debug!(
            variant = %S::VARIANT,
            order = %self.order,
            lines = lines.len(),
            empties = empties.len(),
            "numeric sort finished"
        );

        let mut output = Vec::with_capacity(lines.len());
        if !descending {
            output.extend_from_slice(&empties);
        }
        output.extend(keyed.iter().map(|&(index, _)| index));
        if descending {
            output.extend_from_slice(&empties);
        }
        Ok(output)
    }
}
