//! Amount file parsing.
//!
//! Accepted layouts:
//! - a JSON array of numbers;
//! - CSV whose header row has an `Amount` column (case-insensitive);
//! - one number per line.
//!
//! Blank lines and lines starting with `#` are ignored in the line formats.

use anyhow::{bail, Context, Result};

/// Parse transaction amounts from file contents.
pub fn parse_amounts(content: &str) -> Result<Vec<f64>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("invalid JSON amount array");
    }

    let mut lines = data_lines(content);
    let Some((first_no, first)) = lines.next() else {
        return Ok(Vec::new());
    };

    if first.contains(',') || first.parse::<f64>().is_err() {
        return parse_csv(first_no, first, lines);
    }

    let mut amounts = vec![parse_number(first_no, first)?];
    for (line_no, line) in lines {
        amounts.push(parse_number(line_no, line)?);
    }
    Ok(amounts)
}

/// Non-blank, non-comment lines with their 1-based line numbers.
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_number(line_no: usize, field: &str) -> Result<f64> {
    field
        .trim()
        .parse()
        .with_context(|| format!("line {line_no}: not a number: {field:?}"))
}

fn parse_csv<'a>(
    header_no: usize,
    header: &str,
    rows: impl Iterator<Item = (usize, &'a str)>,
) -> Result<Vec<f64>> {
    let Some(column) = header
        .split(',')
        .position(|name| name.trim().trim_matches('"').eq_ignore_ascii_case("amount"))
    else {
        bail!("line {header_no}: CSV header has no Amount column");
    };

    rows.map(|(line_no, row)| {
        let field = row
            .split(',')
            .nth(column)
            .with_context(|| format!("line {line_no}: missing Amount field"))?;
        parse_number(line_no, field.trim().trim_matches('"'))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array() {
        let amounts = parse_amounts(" [1200.5, 30, -4.25]\n").unwrap();
        assert_eq!(amounts, vec![1200.5, 30.0, -4.25]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_amounts("[1, 2,").is_err());
    }

    #[test]
    fn one_number_per_line() {
        let amounts = parse_amounts("# exported\n100\n\n250.75\n  3 \n").unwrap();
        assert_eq!(amounts, vec![100.0, 250.75, 3.0]);
    }

    #[test]
    fn bad_line_reports_line_number() {
        let err = parse_amounts("100\nabc\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn csv_with_amount_column() {
        let csv = "Order ID,Amount,Customer ID\nORD-1,1500.00,CUST-1\nORD-2,\"42.10\",CUST-2\n";
        assert_eq!(parse_amounts(csv).unwrap(), vec![1500.0, 42.1]);
    }

    #[test]
    fn csv_header_is_case_insensitive() {
        assert_eq!(parse_amounts("id,AMOUNT\n1,7\n").unwrap(), vec![7.0]);
    }

    #[test]
    fn csv_without_amount_column() {
        let err = parse_amounts("id,total\n1,7\n").unwrap_err();
        assert!(err.to_string().contains("Amount column"));
    }

    #[test]
    fn csv_short_row() {
        let err = parse_amounts("id,amount\n1\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn empty_file_has_no_amounts() {
        assert!(parse_amounts("").unwrap().is_empty());
        assert!(parse_amounts("\n# nothing\n").unwrap().is_empty());
    }
}
