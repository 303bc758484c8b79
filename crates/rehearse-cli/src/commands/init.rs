//! The `rehearse init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("rehearse.toml").exists() {
        println!("rehearse.toml already exists, skipping.");
    } else {
        std::fs::write("rehearse.toml", SAMPLE_CONFIG)?;
        println!("Created rehearse.toml");
    }

    std::fs::create_dir_all("question-banks")?;
    let example_path = Path::new("question-banks/example.toml");
    if example_path.exists() {
        println!("question-banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created question-banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: rehearse validate --bank question-banks/example.toml");
    println!("  2. Run: rehearse pick --bank question-banks/example.toml --count 2");
    println!(
        "  3. Run: rehearse score --bank question-banks/example.toml \
         --question \"What is a hash map?\" --answer \"...\""
    );

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# rehearse configuration

[lexicon]
filler_phrases = ["um", "uh", "like", "you know", "basically", "actually"]
spoken_fillers = ["um", "uh", "like", "you know", "basically", "actually", "literally", "so", "well"]

[voice]
# Answer length assumed when computing words per minute.
assumed_answer_secs = 30
default_confidence = 70

[selection]
# seed = 42
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
name = "Example Question Bank"
description = "A couple of starter questions"
default_role = "backend"
default_ideal_length = 60

[[questions]]
id = "hash-map"
text = "What is a hash map?"
difficulty = "easy"
category = "data structures"
tags = ["basics"]
expected_keywords = ["hash", "key", "bucket", "collision"]

[[questions]]
id = "http-idempotency"
text = "Which HTTP methods are idempotent and why does it matter?"
difficulty = "medium"
category = "web"
expected_keywords = ["get", "put", "delete", "retry"]
ideal_length = 80
"#;
