//! Interactive command shell
//!
//! Line commands over a string-keyed collaboration graph:
//!
//! - `path A,B` — Dijkstra shortest path between two names
//! - `bfs A,B` — breadth-first path between two names
//! - `add FILE...` — import additional record files
//! - `dia` — vertex count and graph diameter
//! - `quit` — exit
//!
//! Engine and import failures print as one-line messages and the loop
//! continues; only `quit` or end of input terminates.

use crate::graph::DenseGraph;
use crate::import::import_file;
use std::io::{self, BufRead, Write};
use tracing::debug;

const USAGE: &str = "commands: path A,B | bfs A,B | add FILE... | dia | quit";

/// Shell state: the graph being queried and mutated.
pub struct Shell {
    graph: DenseGraph<String>,
}

impl Shell {
    pub fn new(graph: DenseGraph<String>) -> Self {
        Shell { graph }
    }

    pub fn graph(&self) -> &DenseGraph<String> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut DenseGraph<String> {
        &mut self.graph
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        write!(output, "> ")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            if !self.handle_line(line.trim(), &mut output)? {
                break;
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        Ok(())
    }

    /// Handle one command line. Returns `false` when the shell should exit.
    pub fn handle_line(&mut self, line: &str, output: &mut impl Write) -> io::Result<bool> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!("command {:?} args {:?}", command, rest);

        match command {
            "path" => self.print_path(rest, true, output)?,
            "bfs" => self.print_path(rest, false, output)?,
            "add" => self.import_files(rest, output)?,
            "dia" => self.print_diameter(output)?,
            "quit" => return Ok(false),
            "" => {}
            _ => writeln!(output, "{USAGE}")?,
        }
        Ok(true)
    }

    fn print_path(&self, pair: &str, weighted: bool, output: &mut impl Write) -> io::Result<()> {
        let Some((first, second)) = pair.split_once(',') else {
            writeln!(output, "expected a comma-separated pair of names")?;
            return Ok(());
        };
        let first = first.trim().to_string();
        let second = second.trim().to_string();

        let path = if weighted {
            self.graph.shortest_path(&first, &second)
        } else {
            self.graph.bfs(&first, &second)
        };
        match path {
            Ok(path) => self.print_credits(&path, output),
            Err(err) => writeln!(output, "{err}"),
        }
    }

    fn print_credits(&self, path: &[String], output: &mut impl Write) -> io::Result<()> {
        for pair in path.windows(2) {
            match self.graph.edge_metadata(&pair[0], &pair[1]) {
                // "(0)" is the no-metadata sentinel; nothing to print.
                Ok(movie) if movie == "(0)" => {}
                Ok(movie) => writeln!(
                    output,
                    "'{}' starred with '{}' in the movie '{}'",
                    pair[0], pair[1], movie
                )?,
                Err(err) => writeln!(output, "{err}")?,
            }
        }
        Ok(())
    }

    fn import_files(&mut self, files: &str, output: &mut impl Write) -> io::Result<()> {
        if files.is_empty() {
            writeln!(output, "add requires at least one file")?;
            return Ok(());
        }
        for file in files.split_whitespace() {
            match import_file(&mut self.graph, file) {
                Ok(stats) => writeln!(
                    output,
                    "{}: {} records, {} new vertices, {} edges",
                    file, stats.records, stats.vertices_added, stats.edges_linked
                )?,
                Err(err) => writeln!(output, "{file}: {err}")?,
            }
        }
        Ok(())
    }

    fn print_diameter(&self, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "{} vertices", self.graph.num_vertices())?;
        match self.graph.diameter() {
            Ok(d) if d.is_infinite() => writeln!(output, "graph is not connected"),
            Ok(d) => writeln!(output, "diameter: {d}"),
            Err(err) => writeln!(output, "{err}"),
        }
    }
}
