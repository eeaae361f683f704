use crate::domain::model::{BuildingRecord, InspectionInput, LineSkipReason, SkippedLine};
use anyhow::{Context, Result};
use tokio::fs;
use tokio::io::{self, AsyncReadExt};

/// Reads the whole document from `path`, or from stdin when no path is given.
pub async fn read_input_text(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .await
            .with_context(|| format!("reading input file: {path}")),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("reading stdin")?;
            Ok(raw)
        }
    }
}

/// Tolerant reader for the inspection document.
///
/// Returns `None` when the two-integer header is missing or malformed. Everything after
/// the header is absorbed leniently: bad inspection tokens are dropped, blank lines do not
/// count toward the declared record total, and input that ends early just ends the parse.
pub fn parse_input(text: &str) -> Option<InspectionInput> {
    let mut cursor = LineCursor::new(text);

    let declared_records: i64 = cursor.next_token()?.parse().ok()?;
    let to_inspect: i64 = cursor.next_token()?.parse().ok()?;

    let mut inspection = Vec::new();
    for _ in 0..to_inspect.max(0) {
        let Some(tok) = cursor.next_token() else {
            break;
        };
        if let Ok(id) = tok.parse::<i64>() {
            inspection.push(id);
        }
    }

    let mut records = Vec::new();
    let mut skipped_lines = Vec::new();
    let mut remaining = declared_records.max(0);

    while remaining > 0 {
        let Some(line) = cursor.next_line() else {
            break;
        };

        if line.text.trim().is_empty() {
            // The unread tail of the inspection line is blank in well-formed input.
            if !line.is_tail {
                skipped_lines.push(SkippedLine {
                    line: line.number,
                    reason: LineSkipReason::Blank,
                });
            }
            continue;
        }

        remaining -= 1;
        match parse_record(line.number, line.text) {
            Some(record) => records.push(record),
            None => skipped_lines.push(SkippedLine {
                line: line.number,
                reason: LineSkipReason::Malformed,
            }),
        }
    }

    Some(InspectionInput {
        declared_records,
        inspection,
        records,
        skipped_lines,
    })
}

fn parse_record(number: usize, text: &str) -> Option<BuildingRecord> {
    let mut tokens = text.split_whitespace();
    let id: i64 = tokens.next()?.parse().ok()?;
    let declared_degree: i64 = tokens.next()?.parse().ok()?;

    let neighbors = tokens
        .take(usize::try_from(declared_degree).unwrap_or(0))
        .map_while(|t| t.parse::<i64>().ok())
        .collect();

    Some(BuildingRecord {
        line: number,
        id,
        declared_degree,
        neighbors,
    })
}

struct Line<'a> {
    number: usize,
    text: &'a str,
    is_tail: bool,
}

/// Mixes whitespace-token reads with whole-line reads over the same text.
///
/// After a token read, the rest of that line stays pending and is what the next
/// [`LineCursor::next_line`] call returns.
struct LineCursor<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    pending: Option<(usize, &'a str)>,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            pending: None,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        loop {
            if let Some((number, rest)) = self.pending.take() {
                let rest = rest.trim_start();
                if !rest.is_empty() {
                    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    let (tok, tail) = rest.split_at(end);
                    self.pending = Some((number, tail));
                    return Some(tok);
                }
            }
            let (idx, text) = self.lines.next()?;
            self.pending = Some((idx + 1, text));
        }
    }

    fn next_line(&mut self) -> Option<Line<'a>> {
        if let Some((number, text)) = self.pending.take() {
            return Some(Line {
                number,
                text,
                is_tail: true,
            });
        }
        let (idx, text) = self.lines.next()?;
        Some(Line {
            number: idx + 1,
            text,
            is_tail: false,
        })
    }
}
