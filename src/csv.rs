// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::options::Columns;
use crate::extract::{DoctorRecord, HEADERS};

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // escaped quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without newline, even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Drop a leading header row (first cell `name`, any case).
pub fn strip_header(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    if rows.first().and_then(|r| r.first()).is_some_and(|c| c.trim().eq_ignore_ascii_case(HEADERS[0])) {
        rows.remove(0);
    }
    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Records ---------------- */

pub fn header_row(columns: Columns) -> Vec<String> {
    let n = column_count(columns);
    HEADERS[..n].iter().map(|h| s!(*h)).collect()
}

fn column_count(columns: Columns) -> usize {
    match columns {
        Columns::Full => HEADERS.len(),
        Columns::WithoutVideo => HEADERS.len() - 1,
    }
}

/// Header line plus one line per record.
pub fn write_records<W: Write>(
    mut w: W,
    records: &[DoctorRecord],
    columns: Columns,
    sep: char,
) -> io::Result<()> {
    let n = column_count(columns);
    write_row(&mut w, &header_row(columns), sep)?;
    for rec in records {
        let mut row = rec.to_row();
        row.truncate(n);
        write_row(&mut w, &row, sep)?;
    }
    Ok(())
}

/// Same as [`write_records`], into a `String` (clipboard).
pub fn records_to_string(records: &[DoctorRecord], columns: Columns, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, columns, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Parse a file produced by [`write_records`]; rows without a name are dropped.
pub fn parse_records(text: &str, sep: char) -> Vec<DoctorRecord> {
    strip_header(parse_rows(text, sep))
        .iter()
        .filter_map(|r| DoctorRecord::from_row(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_survive() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a,b"), s!("say \"hi\""), s!("plain")], ',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\"a,b\",\"say \"\"hi\"\"\",plain\n");
        assert_eq!(parse_rows(&text, ','), vec![vec![s!("a,b"), s!("say \"hi\""), s!("plain")]]);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\nc,d", ',');
        assert_eq!(rows, vec![vec![s!("a"), s!("b")], vec![s!("c"), s!("d")]]);
    }
}
