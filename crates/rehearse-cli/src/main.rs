//! rehearse CLI: score interview practice answers from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rehearse", version, about = "Rule-based interview answer scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single answer
    Score {
        /// Question bank file or directory to look the rubric up in
        #[arg(long, requires = "question", conflicts_with = "keywords")]
        bank: Option<PathBuf>,

        /// Question text (rubric lookup key)
        #[arg(long)]
        question: Option<String>,

        /// Expected keywords, comma-separated (instead of --bank)
        #[arg(long)]
        keywords: Option<String>,

        /// Ideal answer length in words (with --keywords)
        #[arg(long, default_value = "80")]
        ideal_length: u32,

        /// Answer text
        #[arg(long, conflicts_with = "answer_file")]
        answer: Option<String>,

        /// Read the answer from a file
        #[arg(long)]
        answer_file: Option<PathBuf>,

        /// Treat the answer as a speech transcript and report voice metrics
        #[arg(long)]
        voice: bool,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a whole interview submission
    Session {
        /// Submission file (.json or .toml)
        #[arg(long)]
        submission: PathBuf,

        /// Question bank file or directory
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "./rehearse-results")]
        output: PathBuf,

        /// Output format: json, markdown, all
        #[arg(long, default_value = "json")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to question bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Pick questions for a practice interview
    Pick {
        /// Question bank file or directory
        #[arg(long)]
        bank: PathBuf,

        /// Only questions for this role
        #[arg(long)]
        role: Option<String>,

        /// Only questions of this difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<String>,

        /// Number of questions
        #[arg(long, default_value = "5")]
        count: usize,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Question ids already asked (comma-separated)
        #[arg(long)]
        exclude: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rehearse=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            bank,
            question,
            keywords,
            ideal_length,
            answer,
            answer_file,
            voice,
            format,
            config,
        } => commands::score::execute(commands::score::ScoreArgs {
            bank,
            question,
            keywords,
            ideal_length,
            answer,
            answer_file,
            voice,
            format,
            config,
        }),
        Commands::Session {
            submission,
            bank,
            output,
            format,
            config,
        } => commands::session::execute(submission, bank, output, format, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Pick {
            bank,
            role,
            difficulty,
            count,
            seed,
            exclude,
            config,
        } => commands::pick::execute(bank, role, difficulty, count, seed, exclude, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
