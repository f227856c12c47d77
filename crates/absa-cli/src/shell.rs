//! Interactive analysis loop on stdin.

use std::io::{self, BufRead, Write};

use absa_core::Analyzer;

use crate::output::{self, OutputFormat};

/// Read one review per line and print its aspect table. A failed analysis
/// is reported and the loop continues; `quit`, `exit`, or EOF leaves.
pub fn run(analyzer: &Analyzer<'_>) -> anyhow::Result<()> {
    println!("enter a review per line (quit to exit)");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "quit" || text == "exit" {
            break;
        }
        match analyzer.analyze(text) {
            Ok(results) => print!("{}", output::render(&results, OutputFormat::Table)?),
            Err(e) => eprintln!("analysis failed: {e}"),
        }
    }
    Ok(())
}
