//! Rendering of analysis results as a table, CSV, or JSON.

use absa_core::{AspectSentiment, SentimentLabel};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    aspect: &'a str,
    score: f32,
    label: SentimentLabel,
}

fn rows(results: &[AspectSentiment]) -> Vec<Row<'_>> {
    results
        .iter()
        .map(|r| Row {
            aspect: &r.aspect,
            score: r.score,
            label: SentimentLabel::from_score(r.score),
        })
        .collect()
}

/// Render one text's results in the requested format. The returned string
/// is ready to print and always ends with a newline unless empty.
pub fn render(results: &[AspectSentiment], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(results)),
        OutputFormat::Csv => Ok(render_csv(results)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&rows(results))?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_table(results: &[AspectSentiment]) -> String {
    if results.is_empty() {
        return "no aspects detected\n".to_string();
    }
    let width = results
        .iter()
        .map(|r| r.aspect.len())
        .max()
        .unwrap_or(0)
        .max("aspect".len());
    let mut out = format!("{:<width$}  {:>6}  label\n", "aspect", "score");
    for r in results {
        let label = SentimentLabel::from_score(r.score);
        out.push_str(&format!(
            "{:<width$}  {:>6.3}  {}\n",
            r.aspect,
            r.score,
            label.as_str()
        ));
    }
    out
}

fn render_csv(results: &[AspectSentiment]) -> String {
    let mut out = String::from("aspect,score,label\n");
    for r in results {
        let label = SentimentLabel::from_score(r.score);
        out.push_str(&format!(
            "{},{:.4},{}\n",
            csv_field(&r.aspect),
            r.score,
            label.as_str()
        ));
    }
    out
}

/// Quote a CSV field only when it needs it.
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<AspectSentiment> {
        vec![
            AspectSentiment {
                aspect: "battery".to_string(),
                score: 0.0,
            },
            AspectSentiment {
                aspect: "excellent".to_string(),
                score: 0.57,
            },
        ]
    }

    #[test]
    fn table_lists_every_aspect_with_label() {
        let table = render(&sample(), OutputFormat::Table).unwrap();
        assert!(table.contains("battery"));
        assert!(table.contains("Neutral"));
        assert!(table.contains("excellent"));
        assert!(table.contains("Positive"));
    }

    #[test]
    fn table_reports_empty_results() {
        let table = render(&[], OutputFormat::Table).unwrap();
        assert_eq!(table, "no aspects detected\n");
    }

    #[test]
    fn csv_has_header_and_one_row_per_aspect() {
        let csv = render(&sample(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "aspect,score,label");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("excellent,0.5700,Positive"));
    }

    #[test]
    fn json_round_trips_label_names() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["aspect"], "battery");
        assert_eq!(parsed[0]["label"], "neutral");
        assert_eq!(parsed[1]["label"], "positive");
    }

    #[test]
    fn csv_fields_quote_only_when_needed() {
        assert_eq!(csv_field("battery"), "battery");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
