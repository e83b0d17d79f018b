/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Flat, column-ordered rendering of simulation results.
//!
//! Entities describe themselves through [`Fields`], an explicit
//! `(name, value)` table in declaration order.  [`records`] turns a slice of
//! entities into a header row plus one row per entity, and the writers emit
//! those rows as CSV (through the `csv` crate) or as space-aligned text.
//!
//! ```text
//! id   arriveTime   executionTime   executionTimeLeft   waitTime
//! 0    0            3               0                   3
//! ```

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

// ── Field table ───────────────────────────────────────────────────────────────

/// A single column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(u16),
    /// Rendered as `[a b c]`.
    Series(Vec<u16>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(v) => write!(f, "{v}"),
            FieldValue::Series(vs) => {
                f.write_str("[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Ordered `(column name, value)` pairs of an entity.
pub trait Fields {
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;
}

/// Header row followed by one row per entity.
///
/// # Errors
/// Fails on an empty slice; there would be no row to derive a header from.
pub fn records<T: Fields>(entities: &[T]) -> Result<Vec<Vec<String>>> {
    let Some(first) = entities.first() else {
        bail!("cannot build records from an empty collection");
    };

    let header: Vec<String> = first
        .fields()
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(entities.len() + 1);
    rows.push(header);
    for entity in entities {
        rows.push(
            entity
                .fields()
                .into_iter()
                .map(|(_, value)| value.to_string())
                .collect(),
        );
    }
    Ok(rows)
}

// ── Writers ───────────────────────────────────────────────────────────────────

/// Comma-separated rows, one per line.
///
/// Cells are quoted only when they contain a delimiter, a quote or a line
/// break, so `[1 2]` series stay bare.
pub fn write_csv<W: Write>(out: W, rows: &[Vec<String>]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Gap between aligned text columns.
const COLUMN_PADDING: usize = 3;

/// Columns padded to the widest cell plus [`COLUMN_PADDING`] spaces.
///
/// The last column is not padded.
pub fn write_text<W: Write>(out: &mut W, rows: &[Vec<String>]) -> io::Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                let width = widths[i] + COLUMN_PADDING;
                line.push_str(&format!("{cell:<width$}"));
            }
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

// ── Files ─────────────────────────────────────────────────────────────────────

/// Write `entities` to `<dir>/<stem>.csv` and `<dir>/<stem>.txt`, creating
/// `dir` if needed.
pub fn save<T: Fields>(dir: &Path, stem: &str, entities: &[T]) -> Result<()> {
    let rows = records(entities)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create output directory: {}", dir.display()))?;

    let csv_path = dir.join(format!("{stem}.csv"));
    let csv = fs::File::create(&csv_path)
        .with_context(|| format!("Cannot create file: {}", csv_path.display()))?;
    write_csv(csv, &rows).with_context(|| format!("Failed to write {}", csv_path.display()))?;

    let txt_path = dir.join(format!("{stem}.txt"));
    let mut txt = fs::File::create(&txt_path)
        .with_context(|| format!("Cannot create file: {}", txt_path.display()))?;
    write_text(&mut txt, &rows).with_context(|| format!("Failed to write {}", txt_path.display()))?;

    debug!(dir = %dir.display(), stem, rows = rows.len() - 1, "records saved");
    Ok(())
}

/// File stem of a saved reference pattern.
pub const REFERENCE_PATTERN_STEM: &str = "pageReferencePattern";

/// Write the reference pattern as a single CSV row to
/// `<dir>/pageReferencePattern.csv`.
pub fn save_reference_pattern(dir: &Path, pattern: &[u16]) -> Result<()> {
    if pattern.is_empty() {
        bail!("the reference pattern to save is empty");
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create output directory: {}", dir.display()))?;

    let path = dir.join(format!("{REFERENCE_PATTERN_STEM}.csv"));
    let row: Vec<String> = pattern.iter().map(u16::to_string).collect();
    let file = fs::File::create(&path)
        .with_context(|| format!("Cannot create file: {}", path.display()))?;
    write_csv(file, &[row]).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
