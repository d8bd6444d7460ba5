//! The three numeric variants

use std::borrow::Cow;

use crate::config::{SortOrder, SortVariant};
use crate::locale::{NumberError, NumericLocale};
use crate::numeric::{leading_admissible, NumericSorter, NumericStrategy};

/// Leading `i64` of each line
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerStrategy;

impl NumericStrategy for IntegerStrategy {
    type Value = i64;
    const ADMISSIBLE: &'static str = "0123456789-";
    const VARIANT: SortVariant = SortVariant::Integer;

    fn convert(&self, prepared: &str, locale: &NumericLocale) -> Result<i64, NumberError> {
        locale.parse_integer(prepared)
    }
}

/// Leading decimal of each line, written with a decimal comma
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalCommaStrategy;

impl NumericStrategy for DecimalCommaStrategy {
    type Value = f64;
    const ADMISSIBLE: &'static str = "0123456789,-";
    const VARIANT: SortVariant = SortVariant::DecimalComma;

    fn prepare<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let run = leading_admissible(line, Self::ADMISSIBLE);
        if run.contains(',') {
            Cow::Owned(run.replace(',', "."))
        } else {
            Cow::Borrowed(run)
        }
    }

    fn convert(&self, prepared: &str, locale: &NumericLocale) -> Result<f64, NumberError> {
        locale.parse_decimal(prepared)
    }
}

/// Leading decimal of each line, written with a decimal dot
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalDotStrategy;

impl NumericStrategy for DecimalDotStrategy {
    type Value = f64;
    const ADMISSIBLE: &'static str = "0123456789.-";
    const VARIANT: SortVariant = SortVariant::DecimalDot;

    fn convert(&self, prepared: &str, locale: &NumericLocale) -> Result<f64, NumberError> {
        locale.parse_decimal(prepared)
    }
}

pub type IntegerSorter = NumericSorter<IntegerStrategy>;
pub type DecimalCommaSorter = NumericSorter<DecimalCommaStrategy>;
pub type DecimalDotSorter = NumericSorter<DecimalDotStrategy>;

impl IntegerSorter {
    pub fn integer(order: SortOrder) -> Self {
        NumericSorter::new(IntegerStrategy, order)
    }
}

impl DecimalCommaSorter {
    pub fn decimal_comma(order: SortOrder) -> Self {
        NumericSorter::new(DecimalCommaStrategy, order)
    }
}

impl DecimalDotSorter {
    pub fn decimal_dot(order: SortOrder) -> Self {
        NumericSorter::new(DecimalDotStrategy, order)
    }
}
