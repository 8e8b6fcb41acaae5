//! Table rendering shared by the list views

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

/// Placeholder shown for an empty list
pub const NO_RESULTS: &str = "  No results found.";

/// Render rows under `headers`; the columns in `right_aligned` hold amounts
pub fn format_table(headers: &[&str], rows: Vec<Vec<String>>, right_aligned: &[usize]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    for &column in right_aligned {
        table.modify(Columns::single(column), Alignment::right());
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&["Name"], Vec::new(), &[]), NO_RESULTS);
    }

    #[test]
    fn test_table_contains_cells() {
        let output = format_table(
            &["Name", "Balance"],
            vec![
                vec!["Checking".into(), "$1,250.00".into()],
                vec!["Cash".into(), "$5.00".into()],
            ],
            &[1],
        );
        assert!(output.contains("Name"));
        assert!(output.contains("Checking"));
        assert!(output.contains("$1,250.00"));
        assert!(output.contains('┌'));
    }

    #[test]
    fn test_right_aligned_amounts() {
        let output = format_table(
            &["Name", "Balance"],
            vec![
                vec!["A".into(), "$1,250.00".into()],
                vec!["B".into(), "$5.00".into()],
            ],
            &[1],
        );
        let row = output.lines().find(|l| l.contains("$5.00")).unwrap();
        assert!(row.contains("     $5.00 │"));
    }

    #[test]
    fn test_colored_cells_align_like_plain_ones() {
        let output = format_table(
            &["Name", "Balance"],
            vec![
                vec!["A".into(), "$1,250.00".into()],
                vec!["B".into(), "\x1b[32m$5.00\x1b[0m".into()],
            ],
            &[1],
        );
        let row = output.lines().find(|l| l.contains("$5.00")).unwrap();
        assert!(row.contains("     \x1b[32m$5.00\x1b[0m │"));
    }
}
