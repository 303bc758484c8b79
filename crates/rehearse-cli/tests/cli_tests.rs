//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BINARY_SEARCH: &str = "Binary search works by repeatedly dividing the sorted array in half. First compare the middle element, then recurse into the correct half. For example, searching for 7 in [1,3,5,7,9] takes log2(5) steps.";

fn rehearse() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("rehearse").unwrap()
}

#[test]
fn validate_backend_bank() {
    rehearse()
        .arg("validate")
        .arg("--bank")
        .arg("../../question-banks/backend.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 questions"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_directory() {
    rehearse()
        .arg("validate")
        .arg("--bank")
        .arg("../../question-banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend Engineering"))
        .stdout(predicate::str::contains("Frontend Engineering"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        r#"[bank]
id = "bad"
name = "Bad"
default_role = "backend"

[[questions]]
id = "q1"
text = "What is a mutex?"
difficulty = "easy"

[[questions]]
id = "q1"
text = "What is a semaphore?"
difficulty = "easy"
expected_keywords = ["counter"]
"#,
    )
    .unwrap();

    rehearse()
        .arg("validate")
        .arg("--bank")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate question ID: q1"))
        .stdout(predicate::str::contains("no expected_keywords"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    rehearse()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn score_with_keywords() {
    rehearse()
        .arg("score")
        .arg("--keywords")
        .arg("binary search, divide, sorted, logarithmic")
        .arg("--ideal-length")
        .arg("40")
        .arg("--answer")
        .arg(BINARY_SEARCH)
        .assert()
        .success()
        .stdout(predicate::str::contains("7.6"))
        .stdout(predicate::str::contains("Good answer length"))
        .stdout(predicate::str::contains(
            "Consider mentioning: divide, logarithmic",
        ));
}

#[test]
fn score_against_bank_as_json() {
    let output = rehearse()
        .arg("score")
        .arg("--bank")
        .arg("../../question-banks/backend.toml")
        .arg("--question")
        .arg("Explain how binary search works.")
        .arg("--answer")
        .arg(BINARY_SEARCH)
        .arg("--voice")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["feedback"]["score"], 7.6);
    assert_eq!(json["rubric"]["ideal_answer_length"], 40);
    assert_eq!(json["voice_metrics"]["words_per_minute"], 64);
    assert_eq!(json["voice_metrics"]["confidence_score"], 86);
}

#[test]
fn score_unknown_question_fails() {
    rehearse()
        .arg("score")
        .arg("--bank")
        .arg("../../question-banks/backend.toml")
        .arg("--question")
        .arg("What is the meaning of life?")
        .arg("--answer")
        .arg("42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("question not found"));
}

#[test]
fn score_rejects_zero_ideal_length() {
    rehearse()
        .arg("score")
        .arg("--keywords")
        .arg("cache")
        .arg("--ideal-length")
        .arg("0")
        .arg("--answer")
        .arg("A cache stores results.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ideal answer length"));
}

#[test]
fn score_requires_rubric() {
    rehearse()
        .arg("score")
        .arg("--answer")
        .arg("Something")
        .assert()
        .failure()
        .stderr(predicate::str::contains("provide a rubric"));
}

#[test]
fn session_writes_reports() {
    let dir = TempDir::new().unwrap();
    let submission = dir.path().join("interview.json");
    std::fs::write(
        &submission,
        serde_json::json!({
            "role": "backend",
            "difficulty": "easy",
            "answers": [
                {
                    "question_id": "binary-search",
                    "question": "Explain how binary search works.",
                    "answer_text": BINARY_SEARCH
                },
                {
                    "question": "What is a hash map and how does it handle collisions?",
                    "answer_text": "   "
                }
            ]
        })
        .to_string(),
    )
    .unwrap();
    let out = dir.path().join("results");

    rehearse()
        .arg("session")
        .arg("--submission")
        .arg(&submission)
        .arg("--bank")
        .arg("../../question-banks")
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score: 7.6/10"))
        .stdout(predicate::str::contains("Answered: 1 (skipped 1)"));

    let files: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert!(files.iter().any(|p| p.extension().is_some_and(|e| e == "json")));
    assert!(files.iter().any(|p| p.extension().is_some_and(|e| e == "md")));
}

#[test]
fn back_to_back_sessions_keep_both_reports() {
    let dir = TempDir::new().unwrap();
    let submission = dir.path().join("interview.toml");
    std::fs::write(
        &submission,
        "[[answers]]\nquestion = \"Explain how binary search works.\"\nanswer_text = \"It halves a sorted array.\"\n",
    )
    .unwrap();
    let out = dir.path().join("results");

    for _ in 0..2 {
        rehearse()
            .arg("session")
            .arg("--submission")
            .arg(&submission)
            .arg("--bank")
            .arg("../../question-banks/backend.toml")
            .arg("--output")
            .arg(&out)
            .assert()
            .success();
    }

    let reports = std::fs::read_dir(&out)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "json")
        })
        .count();
    assert_eq!(reports, 2);
}

#[test]
fn session_rejects_unsupported_submission() {
    let dir = TempDir::new().unwrap();
    let submission = dir.path().join("interview.txt");
    std::fs::write(&submission, "not a submission").unwrap();

    rehearse()
        .arg("session")
        .arg("--submission")
        .arg(&submission)
        .arg("--output")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported submission format"));
}

#[test]
fn session_rejects_unknown_format() {
    rehearse()
        .arg("session")
        .arg("--submission")
        .arg("whatever.json")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn pick_is_reproducible_with_seed() {
    let run = || {
        rehearse()
            .arg("pick")
            .arg("--bank")
            .arg("../../question-banks")
            .arg("--count")
            .arg("3")
            .arg("--seed")
            .arg("7")
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 3);
}

#[test]
fn pick_filters_and_reports_short_pool() {
    rehearse()
        .arg("pick")
        .arg("--bank")
        .arg("../../question-banks")
        .arg("--role")
        .arg("backend")
        .arg("--difficulty")
        .arg("senior")
        .arg("--count")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("rate-limiter"))
        .stdout(predicate::str::contains("cache-invalidation"))
        .stdout(predicate::str::contains("frontend").not())
        .stderr(predicate::str::contains("Only 2 matching"));
}

#[test]
fn pick_rejects_unknown_difficulty() {
    rehearse()
        .arg("pick")
        .arg("--bank")
        .arg("../../question-banks")
        .arg("--difficulty")
        .arg("impossible")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    rehearse()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created rehearse.toml"))
        .stdout(predicate::str::contains(
            "Created question-banks/example.toml",
        ));

    assert!(dir.path().join("rehearse.toml").exists());
    assert!(dir.path().join("question-banks/example.toml").exists());

    // the generated bank is itself valid
    rehearse()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg("question-banks/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    rehearse().current_dir(dir.path()).arg("init").assert().success();

    rehearse()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    rehearse()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule-based interview answer scoring"));
}

#[test]
fn version_output() {
    rehearse()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rehearse"));
}
