//! Parsing of `ps aux --no-headers` output

use std::str::FromStr;

use tracing::debug;

use super::record::ProcessRecord;

/// Number of columns in a `ps aux` row; the last one is the command line
const FIELD_COUNT: usize = 11;

/// Parse every well-formed line of a process listing, in input order
///
/// Lines with fewer than eleven columns are skipped without comment; lines
/// whose numeric columns do not parse are skipped with a debug log.
pub fn parse_process_listing(text: &str) -> Vec<ProcessRecord> {
    text.lines()
        .filter_map(|line| {
            let fields = split_fields(line)?;
            match parse_fields(&fields) {
                Ok(record) => Some(record),
                Err(column) => {
                    debug!(column, line, "Skipping process line with unparseable column");
                    None
                }
            }
        })
        .collect()
}

/// Split into exactly eleven fields, the last keeping its inner whitespace
fn split_fields(line: &str) -> Option<[&str; FIELD_COUNT]> {
    let mut fields = [""; FIELD_COUNT];
    let mut rest = line.trim();

    for slot in fields.iter_mut().take(FIELD_COUNT - 1) {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        *slot = &rest[..end];
        rest = rest[end..].trim_start();
    }

    if rest.is_empty() {
        return None;
    }
    fields[FIELD_COUNT - 1] = rest;
    Some(fields)
}

fn parse_fields(fields: &[&str; FIELD_COUNT]) -> Result<ProcessRecord, &'static str> {
    Ok(ProcessRecord {
        user: fields[0].to_string(),
        pid: number(fields[1], "pid")?,
        cpu: percent(fields[2], "cpu")?,
        mem: percent(fields[3], "mem")?,
        vsz: number(fields[4], "vsz")?,
        rss: number(fields[5], "rss")?,
        tty: fields[6].to_string(),
        stat: fields[7].to_string(),
        start: fields[8].to_string(),
        time: fields[9].to_string(),
        command: fields[10].to_string(),
    })
}

fn number<T: FromStr>(value: &str, column: &'static str) -> Result<T, &'static str> {
    value.parse().map_err(|_| column)
}

/// Usage percentages must be finite; `nan` and `inf` have no JSON number form
fn percent(value: &str, column: &'static str) -> Result<f64, &'static str> {
    let v: f64 = number(value, column)?;
    if v.is_finite() { Ok(v) } else { Err(column) }
}
