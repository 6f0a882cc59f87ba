//! Reads a text file line by line and summarises it
//!
//! Usage: `cargo run --example line_reader -- <path>`

use gho::io::read_line;
use gho::prelude::*;
use gho::system::Stopwatch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> GhoResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        warn!("no input file given");
        return Ok(());
    };

    let stopwatch = Stopwatch::start();
    let mut reader = FileReader::open(&path)?;
    let mut longest = GhoString::new();
    let mut lines = 0usize;
    let mut words = 0usize;

    while !reader.is_at_end()? {
        let line = read_line(&mut reader)?;
        lines += 1;
        words += line.as_str().split_whitespace().count();
        if line.size() > longest.size() {
            longest = line;
        }
    }

    info!(
        "{}: {} lines, {} words, longest line has {} chars",
        path,
        lines,
        words,
        longest.size()
    );
    info!("longest: {}", longest);
    info!("read in {:.3} ms", stopwatch.elapsed_milliseconds());
    Ok(())
}
