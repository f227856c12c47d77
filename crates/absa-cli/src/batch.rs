//! Batch analysis over line-delimited text files.
//!
//! Failures are isolated per line: a text that fails analysis is logged
//! and skipped, never aborting the rest of the batch.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use absa_core::{Analyzer, SentimentLabel};

use crate::output::{csv_field, OutputFormat};

#[derive(Debug, Serialize)]
struct BatchRow {
    line: usize,
    aspect: String,
    score: f32,
    label: SentimentLabel,
}

pub fn run(
    analyzer: &Analyzer<'_>,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("reading batch input {}", input.display()))?;
    let lines: Vec<&str> = raw.lines().collect();
    let report = render_lines(analyzer, &lines, format)?;

    match output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("writing batch output {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}

/// Analyze each non-empty line and render the combined report. Line numbers
/// are 1-based and refer to the input file.
fn render_lines(
    analyzer: &Analyzer<'_>,
    lines: &[&str],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut rows = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match analyzer.analyze(line) {
            Ok(results) => {
                for result in results {
                    rows.push(BatchRow {
                        line: idx + 1,
                        label: SentimentLabel::from_score(result.score),
                        aspect: result.aspect,
                        score: result.score,
                    });
                }
            }
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "skipping line that failed analysis");
            }
        }
    }

    match format {
        OutputFormat::Csv => Ok(render_csv(&rows)),
        OutputFormat::Table => Ok(render_table(&rows)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&rows)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_csv(rows: &[BatchRow]) -> String {
    let mut out = String::from("line,aspect,score,label\n");
    for row in rows {
        out.push_str(&format!(
            "{},{},{:.4},{}\n",
            row.line,
            csv_field(&row.aspect),
            row.score,
            row.label.as_str()
        ));
    }
    out
}

fn render_table(rows: &[BatchRow]) -> String {
    if rows.is_empty() {
        return "no aspects detected\n".to_string();
    }
    let mut out = format!("{:>4}  {:<16}  {:>6}  label\n", "line", "aspect", "score");
    for row in rows {
        out.push_str(&format!(
            "{:>4}  {:<16}  {:>6.3}  {}\n",
            row.line,
            row.aspect,
            row.score,
            row.label.as_str()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use absa_core::{AbsaError, Analyzer, DependencyEdge, DependencyParse};
    use absa_nlp::{Models, RuleTagger, ValenceLexicon};

    use super::{render_lines, OutputFormat};

    /// Fails on sentences containing a marker word, parses nothing else.
    struct TrapParser;

    impl DependencyParse for TrapParser {
        fn parse(&self, sentence: &str) -> Result<Vec<DependencyEdge>, AbsaError> {
            if sentence.contains("poison") {
                Err(AbsaError::Parser("trap sprung".to_string()))
            } else {
                Ok(Vec::new())
            }
        }
    }

    #[test]
    fn failed_lines_are_skipped_not_fatal() {
        let tagger = RuleTagger::new();
        let parser = TrapParser;
        let lexicon = ValenceLexicon::new();
        let stopwords: HashSet<String> = HashSet::new();
        let analyzer = Analyzer::new(&tagger, &parser, &lexicon, &stopwords);

        let lines = vec!["great phone", "poison line", "dull screen"];
        let csv = render_lines(&analyzer, &lines, OutputFormat::Csv).unwrap();

        // Lines 1 and 3 produced rows; line 2 vanished without killing the run.
        assert!(csv.contains("1,great"), "{csv}");
        assert!(csv.contains("3,dull"), "{csv}");
        assert!(!csv.contains("poison"), "{csv}");
    }

    #[test]
    fn empty_lines_are_ignored() {
        let models = Models::builtin();
        let analyzer = models.analyzer();
        let lines = vec!["", "   ", "great phone"];
        let csv = render_lines(&analyzer, &lines, OutputFormat::Csv).unwrap();
        assert!(csv.contains("3,great"), "{csv}");
        assert!(!csv.contains("\n1,"), "{csv}");
    }

    #[test]
    fn json_report_carries_line_numbers() {
        let models = Models::builtin();
        let analyzer = models.analyzer();
        let lines = vec!["great phone"];
        let json = render_lines(&analyzer, &lines, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["line"], 1);
    }
}
