use clap::Parser;
use costar::graph::DenseGraph;
use costar::import::import_file;
use costar::shell::Shell;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Collaboration graph engine: import record files, then query paths,
/// traversals, and the graph diameter interactively.
#[derive(Parser)]
#[command(name = "costar", version, about)]
struct Args {
    /// Record files to import at startup
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut graph = DenseGraph::new();
    let total = args.files.len();
    for (i, file) in args.files.iter().enumerate() {
        println!("*** reading {} ({}/{})", file.display(), i + 1, total);
        if let Err(err) = import_file(&mut graph, file) {
            error!("failed to import {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    }
    println!(
        "{} vertices, {} edges loaded",
        graph.num_vertices(),
        graph.num_edges()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(graph);
    if let Err(err) = shell.run(stdin.lock(), stdout.lock()) {
        error!("shell i/o error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
