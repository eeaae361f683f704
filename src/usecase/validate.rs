use crate::infrastructure::schema_validator::{
    validate_building_line, validate_header_line, validate_inspection_line,
};
use anyhow::{anyhow, Context, Result};
use serde_json::json;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    pub buildings: usize,
    pub inspections: usize,
}

/// Checks `text` against the strict contest input format.
///
/// This is much stricter than the solver's reader: every ID must be a positive integer
/// below `max_id`, lists must be distinct, declared counts must match, and nothing may
/// follow the last building line.
pub fn validate_input_text(text: &str, max_id: usize) -> Result<ValidationSummary> {
    if text.is_empty() {
        return Err(anyhow!("missing header line"));
    }
    let (header, rest) = text
        .split_once('\n')
        .ok_or_else(|| anyhow!("line 1: header must end with a newline"))?;
    let mut lines = rest.lines().enumerate().map(|(i, l)| (i + 2, l));

    validate_header_line(&json!({ "line": header })).context("line 1")?;
    let mut parts = header.split(' ');
    let num_buildings =
        parse_bounded(parts.next(), 1, max_id).context("line 1: building count")?;
    let num_to_inspect =
        parse_bounded(parts.next(), 1, max_id).context("line 1: inspection count")?;

    let (_, inspect_line) = lines
        .next()
        .ok_or_else(|| anyhow!("missing inspection line"))?;
    let inspect_parts: Vec<&str> = inspect_line.split_whitespace().collect();
    if inspect_parts.len() != num_to_inspect {
        return Err(anyhow!(
            "line 2: expected {num_to_inspect} building IDs to inspect, but got {}",
            inspect_parts.len()
        ));
    }
    validate_inspection_line(&json!({ "ids": inspect_parts })).context("line 2")?;
    for part in inspect_parts.iter().copied() {
        parse_bounded(Some(part), 1, max_id).context("line 2: inspection ID")?;
    }

    let mut building_ids: BTreeSet<usize> = BTreeSet::new();
    for seen in 0..num_buildings {
        let (number, line) = lines.next().ok_or_else(|| {
            anyhow!("expected {num_buildings} building lines, but input ended after {seen}")
        })?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(anyhow!(
                "line {number}: each building line must have at least ID and connection count"
            ));
        }

        validate_building_line(&json!({
            "id": parts[0],
            "count": parts[1],
            "neighbors": &parts[2..],
        }))
        .with_context(|| format!("line {number}"))?;

        let id = parse_bounded(Some(parts[0]), 1, max_id)
            .with_context(|| format!("line {number}: building ID"))?;
        if !building_ids.insert(id) {
            return Err(anyhow!("line {number}: duplicate building ID: {id}"));
        }

        let count = parse_count(parts[1], max_id.saturating_sub(1))
            .with_context(|| format!("line {number}: connection count"))?;
        if parts.len() != count + 2 {
            return Err(anyhow!(
                "line {number}: building {id} claims {count} connections but has {}",
                parts.len() - 2
            ));
        }

        for part in parts[2..].iter().copied() {
            parse_bounded(Some(part), 1, max_id)
                .with_context(|| format!("line {number}: connected building ID"))?;
        }
    }

    if let Some((number, _)) = lines.next() {
        return Err(anyhow!("line {number}: unexpected content after last building line"));
    }

    Ok(ValidationSummary {
        buildings: num_buildings,
        inspections: num_to_inspect,
    })
}

/// Parses `raw` and requires `low <= value < high`.
fn parse_bounded(raw: Option<&str>, low: usize, high: usize) -> Result<usize> {
    let raw = raw.ok_or_else(|| anyhow!("missing value"))?;
    let value: usize = raw
        .parse()
        .with_context(|| format!("not an integer: {raw}"))?;
    if value < low || value >= high {
        return Err(anyhow!("{value} outside [{low}, {high})"));
    }
    Ok(value)
}

/// Connection counts are read leniently: a sign and leading zeros are allowed.
fn parse_count(raw: &str, high: usize) -> Result<usize> {
    let value: i64 = raw
        .parse()
        .with_context(|| format!("not an integer: {raw}"))?;
    usize::try_from(value)
        .ok()
        .filter(|&v| v < high)
        .ok_or_else(|| anyhow!("{value} outside [0, {high})"))
}
