//! Text measurement helpers.

/// Counts the terminal rows a block of text occupies once printed.
///
/// Each `\n`-separated line takes at least one row. When `columns` is known,
/// lines wider than the terminal wrap onto extra rows. ANSI escape codes do
/// not count towards the width.
///
/// # Example
///
/// ```rust
/// use liveterm_render::display_rows;
///
/// assert_eq!(display_rows("one line", None), 1);
/// assert_eq!(display_rows("two\nlines", Some(80)), 2);
/// assert_eq!(display_rows("abcdefghij", Some(4)), 3);
/// ```
pub fn display_rows(block: &str, columns: Option<usize>) -> usize {
    block
        .split('\n')
        .map(|line| {
            let width = console::measure_text_width(line);
            match columns {
                Some(cols) if cols > 0 && width > cols => width.div_ceil(cols),
                _ => 1,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_width_does_not_wrap() {
        assert_eq!(display_rows("abcd", Some(4)), 1);
        assert_eq!(display_rows("abcde", Some(4)), 2);
    }

    #[test]
    fn test_ansi_codes_are_ignored() {
        let styled = console::style("abcd").red().force_styling(true).to_string();
        assert!(styled.len() > 4);
        assert_eq!(display_rows(&styled, Some(4)), 1);
    }

    #[test]
    fn test_wide_characters() {
        // Each CJK character occupies two columns
        assert_eq!(display_rows("日本語", Some(4)), 2);
    }

    #[test]
    fn test_zero_columns_treated_as_unknown() {
        assert_eq!(display_rows("abcdef", Some(0)), 1);
    }

    #[test]
    fn test_empty_block_is_one_row() {
        assert_eq!(display_rows("", None), 1);
    }

    proptest! {
        #[test]
        fn prop_rows_at_least_lines(lines in proptest::collection::vec("[a-z ]{0,30}", 1..6), cols in 1usize..40) {
            let block = lines.join("\n");
            let rows = display_rows(&block, Some(cols));
            prop_assert!(rows >= lines.len());
            prop_assert_eq!(display_rows(&block, None), lines.len());
        }

        #[test]
        fn prop_single_line_row_count(len in 0usize..200, cols in 1usize..50) {
            let line = "x".repeat(len);
            let expected = if len <= cols { 1 } else { len.div_ceil(cols) };
            prop_assert_eq!(display_rows(&line, Some(cols)), expected);
        }
    }
}
