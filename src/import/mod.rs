//! Record-file importer
//!
//! Reads collaboration records of the form
//!
//! ```text
//! The Matrix(1999)
//! Keanu Reeves
//! Laurence Fishburne
//!
//! ```
//!
//! one header line `Title(YYYY)` followed by one participant per line,
//! terminated by a blank line or end of file. Every participant becomes a
//! vertex and every unordered participant pair gets a labeled edge
//! carrying the title and release year. Re-importing the same file is
//! idempotent: duplicate vertices and non-preferred edges are skipped.

use crate::graph::{DenseGraph, GraphError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while importing a record file
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record header at line {line}: {text:?}")]
    MalformedRecord { line: usize, text: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Counters reported after importing one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    /// Records (header + participant block) parsed
    pub records: usize,
    /// Vertices newly added (duplicates not counted)
    pub vertices_added: usize,
    /// Labeled edges written, replacements included
    pub edges_linked: usize,
}

/// Import one record file into a string-keyed graph.
pub fn import_file(
    graph: &mut DenseGraph<String>,
    path: impl AsRef<Path>,
) -> Result<ImportStats, ImportError> {
    let path = path.as_ref();
    info!("reading records from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    import_records(graph, reader)
}

/// Import records from any line source. See the module docs for the format.
pub fn import_records(
    graph: &mut DenseGraph<String>,
    reader: impl BufRead,
) -> Result<ImportStats, ImportError> {
    // Title runs to the final "(year)" group; titles may themselves
    // contain parentheses.
    let header =
        Regex::new(r"^(.*)\((\d{4})\)\s*$").expect("header pattern is valid");
    let mut stats = ImportStats::default();
    let mut participants: Vec<String> = Vec::new();
    let mut record: Option<(String, i64)> = None;

    let mut lines = reader.lines();
    let mut line_no = 0usize;
    loop {
        let line = lines.next().transpose()?;
        line_no += 1;

        match (record.is_some(), line.as_deref()) {
            // Between records: skip extra blank lines, a non-blank line
            // starts the next record.
            (false, Some("")) => {}
            (false, Some(text)) => {
                let caps = header
                    .captures(text)
                    .ok_or_else(|| ImportError::MalformedRecord {
                        line: line_no,
                        text: text.to_string(),
                    })?;
                let title = caps[1].trim_end().to_string();
                let year: i64 = caps[2].parse().expect("header year is digits");
                record = Some((title, year));
            }
            // Inside a record: collect participants until the terminator.
            (true, Some(text)) if !text.is_empty() => {
                participants.push(text.to_string());
            }
            (true, _) => {
                if let Some((title, year)) = record.take() {
                    link_record(graph, &title, year, &participants, &mut stats);
                }
                participants.clear();
            }
            (false, None) => break,
        }
        if line.is_none() && record.is_none() {
            break;
        }
    }
    info!(
        "imported {} records ({} new vertices, {} edges)",
        stats.records, stats.vertices_added, stats.edges_linked
    );
    Ok(stats)
}

fn link_record(
    graph: &mut DenseGraph<String>,
    title: &str,
    year: i64,
    participants: &[String],
    stats: &mut ImportStats,
) {
    stats.records += 1;
    debug!("record {}({}) with {} participants", title, year, participants.len());
    for name in participants {
        match graph.add_vertex(name.clone()) {
            Ok(()) => stats.vertices_added += 1,
            Err(GraphError::DuplicateVertex) => {}
            Err(_) => unreachable!("add_vertex only reports duplicates"),
        }
    }
    for (i, first) in participants.iter().enumerate() {
        for second in &participants[i + 1..] {
            match graph.add_labeled_edge(first, second, title, year) {
                Ok(()) => stats.edges_linked += 1,
                // The stored edge is the preferred one; keep it.
                Err(GraphError::DuplicateEdge) => {}
                Err(_) => unreachable!("both endpoints were just added"),
            }
        }
    }
}
