//! Property checks shared by every sort variant

use linesort::{new_sorter, sort_lines, LineSorter, SortOrder, SortVariant};
use proptest::prelude::*;

const ORDERS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

fn sorted_copy(lines: &[String]) -> Vec<String> {
    let mut copy = lines.to_vec();
    copy.sort();
    copy
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Integer lines with an optional unit suffix, plus blank lines
fn integer_line() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (any::<i64>(), prop::option::of("[a-z]{1,4}"))
            .prop_map(|(n, unit)| match unit {
                Some(unit) => format!("{n} {unit}"),
                None => n.to_string(),
            }),
        1 => "[ \t]{0,3}",
    ]
}

/// Decimal lines written with either separator, plus blank lines
fn decimal_line(separator: char) -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-100_000i32..100_000, 0u32..1000).prop_map(move |(whole, frac)| {
            format!("{whole}{separator}{frac:03}")
        }),
        1 => "[ \t]{0,3}",
    ]
}

proptest! {
    #[test]
    fn prop_output_is_permutation(
        lines in prop::collection::vec(integer_line(), 0..40),
    ) {
        for variant in SortVariant::ALL {
            for order in ORDERS {
                let sorted = sort_lines(&lines, variant, order).unwrap();
                prop_assert_eq!(sorted.len(), lines.len());
                prop_assert_eq!(sorted_copy(&sorted), sorted_copy(&lines));
            }
        }
    }

    #[test]
    fn prop_integer_sort_never_fails_on_numbers(
        lines in prop::collection::vec(integer_line(), 0..40),
    ) {
        for order in ORDERS {
            prop_assert!(sort_lines(&lines, SortVariant::Integer, order).is_ok());
        }
    }

    #[test]
    fn prop_lexicographic_descending_is_reverse(
        lines in prop::collection::btree_set("[ -~]{0,8}", 0..30),
    ) {
        let lines: Vec<String> = lines.into_iter().rev().collect();
        let asc = sort_lines(&lines, SortVariant::Lexicographic, SortOrder::Ascending).unwrap();
        let mut desc = sort_lines(&lines, SortVariant::Lexicographic, SortOrder::Descending).unwrap();
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn prop_empties_are_contiguous_and_stable(
        lines in prop::collection::vec(integer_line(), 0..40),
    ) {
        let empties: Vec<String> = lines.iter().filter(|l| is_blank(l)).cloned().collect();
        let n = empties.len();

        let asc = sort_lines(&lines, SortVariant::Integer, SortOrder::Ascending).unwrap();
        prop_assert_eq!(&asc[..n], &empties[..]);
        prop_assert!(asc[n..].iter().all(|l| !is_blank(l)));

        let desc = sort_lines(&lines, SortVariant::Integer, SortOrder::Descending).unwrap();
        let tail = desc.len() - n;
        prop_assert_eq!(&desc[tail..], &empties[..]);
        prop_assert!(desc[..tail].iter().all(|l| !is_blank(l)));
    }

    #[test]
    fn prop_integer_keys_are_ordered(
        lines in prop::collection::vec(integer_line(), 0..40),
    ) {
        let sorted = sort_lines(&lines, SortVariant::Integer, SortOrder::Ascending).unwrap();
        let keys: Vec<i64> = sorted
            .iter()
            .filter(|l| !is_blank(l))
            .map(|l| l.split(' ').next().unwrap().parse().unwrap())
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_sorting_is_idempotent(
        comma in prop::collection::vec(decimal_line(','), 0..30),
        dot in prop::collection::vec(decimal_line('.'), 0..30),
    ) {
        for order in ORDERS {
            let once = sort_lines(&comma, SortVariant::DecimalComma, order).unwrap();
            let twice = sort_lines(&once, SortVariant::DecimalComma, order).unwrap();
            prop_assert_eq!(&once, &twice);

            let once = sort_lines(&dot, SortVariant::DecimalDot, order).unwrap();
            let twice = sort_lines(&once, SortVariant::DecimalDot, order).unwrap();
            prop_assert_eq!(&once, &twice);
        }
    }

    #[test]
    fn prop_single_bad_line_is_located(
        mut lines in prop::collection::vec(decimal_line('.'), 0..30),
        position in any::<prop::sample::Index>(),
        order_desc in any::<bool>(),
    ) {
        let index = position.index(lines.len() + 1);
        lines.insert(index, "not a number".to_string());

        let order = SortOrder::from_reverse(order_desc);
        let err = sort_lines(&lines, SortVariant::DecimalDot, order).unwrap_err();
        prop_assert_eq!(err.line_index(), Some(index));
    }
}

#[test]
fn decimal_comma_reads_comma_as_decimal_point() {
    let lines: Vec<String> = ["2,5", "1,5", "10", "1,45"].iter().map(|s| s.to_string()).collect();
    let sorter = new_sorter(SortVariant::DecimalComma, SortOrder::Ascending);
    assert_eq!(sorter.sort(&lines).unwrap(), vec!["1,45", "1,5", "2,5", "10"]);
}
