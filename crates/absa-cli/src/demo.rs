//! Canned review scenarios for a quick look at pipeline behavior.

use absa_core::Analyzer;

use crate::output::{self, OutputFormat};

const SCENARIOS: &[(&str, &str)] = &[
    (
        "Phone review",
        "The battery life of this phone is excellent, but the camera quality is disappointing.",
    ),
    (
        "Person description",
        "Shreyas is intelligent but he is very lazy.",
    ),
    (
        "Food review",
        "The ice cream is great but the waffle is hard to eat.",
    ),
    (
        "Dress review",
        "Quality of the dress is good but the colour is dull",
    ),
    (
        "Book review",
        "Appearance of the cover page is beautiful but paper quality is poor",
    ),
    (
        "Movie experience",
        "The movie was super but the screen and sound quality in the theatre were horrible",
    ),
];

pub fn run(analyzer: &Analyzer<'_>) -> anyhow::Result<()> {
    for (name, text) in SCENARIOS {
        println!("{name}: {text}");
        match analyzer.analyze(text) {
            Ok(results) => print!("{}", output::render(&results, OutputFormat::Table)?),
            Err(e) => eprintln!("analysis failed: {e}"),
        }
        println!();
    }
    Ok(())
}
