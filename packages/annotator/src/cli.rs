//! Command-line interface for the annotator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use finnsyll_engine::{
    evaluate_record, render_plain, Annotator, Evaluation, Lexicon, Summary, Verdict,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{LexiconConfig, LexiconPaths};
use crate::error::Result;
use crate::gold::load_gold_file;
use crate::loader::load_lexicon;

/// Finnsyll - Finnish syllabification, weight, sonority and stress annotation.
#[derive(Parser)]
#[command(name = "finnsyll")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Lexicon configuration file (default: lexicon files in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate words with syllables, weight, sonority and stress.
    Annotate {
        /// Words to annotate
        #[arg(required = true)]
        words: Vec<String>,

        /// Print the annotations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the plain syllabification of each word.
    Syllabify {
        /// Words to syllabify
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Score predictions against a YAML gold file.
    Evaluate {
        /// Gold file with `word` and optional `gold` entries
        gold_file: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let lexicon = configured_lexicon(cli.config.as_deref())?;

    match cli.command {
        Commands::Annotate { words, json } => annotate_command(&lexicon, &words, json),
        Commands::Syllabify { words } => syllabify_command(&lexicon, &words),
        Commands::Evaluate { gold_file } => evaluate_command(&lexicon, &gold_file),
    }
}

/// Load the lexicon named by a configuration file, or the default lexicon
/// files in the current directory.
pub fn configured_lexicon(config: Option<&Path>) -> Result<Lexicon> {
    let paths = match config {
        Some(path) => {
            let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
            LexiconConfig::from_yaml_file(path)?.resolve(base_dir)
        }
        None => LexiconPaths::in_dir(Path::new(".")),
    };
    load_lexicon(&paths)
}

/// Execute the annotate command.
fn annotate_command(lexicon: &Lexicon, words: &[String], json: bool) -> Result<()> {
    let annotator = Annotator::new(lexicon);
    let annotations = annotator.annotate_batch(words);

    if json {
        println!("{}", serde_json::to_string_pretty(&annotations)?);
        return Ok(());
    }

    for (word, annotation) in words.iter().zip(&annotations) {
        println!("{}", style(word).cyan().bold());
        println!("{annotation}");
    }
    Ok(())
}

/// Execute the syllabify command.
fn syllabify_command(lexicon: &Lexicon, words: &[String]) -> Result<()> {
    let annotator = Annotator::new(lexicon);
    for annotation in annotator.annotate_batch(words) {
        println!("{}", render_plain(&annotation));
    }
    Ok(())
}

/// Execute the evaluate command.
fn evaluate_command(lexicon: &Lexicon, gold_file: &Path) -> Result<()> {
    let records = load_gold_file(gold_file)?;
    let annotator = Annotator::new(lexicon);

    println!(
        "{} {} ({} words)",
        style("Evaluating").bold(),
        style(gold_file.display()).cyan(),
        records.len()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut evaluations: Vec<Evaluation> = Vec::with_capacity(records.len());
    for record in &records {
        pb.set_message(format!("Annotating {}...", record.word));
        evaluations.push(evaluate_record(&annotator, record));
    }
    pb.finish_and_clear();

    for evaluation in evaluations
        .iter()
        .filter(|e| e.score.verdict == Verdict::NotGold)
    {
        let predicted: Vec<&str> = evaluation.predicted.iter().map(String::as_str).collect();
        println!(
            "  {} {} (P / R: {})",
            style(&evaluation.word).red(),
            predicted.join(", "),
            evaluation.score.p_r()
        );
    }

    let summary = Summary::from_scores(evaluations.iter().map(|e| &e.score));
    println!();
    println!("{} {}", style("Summary:").green().bold(), summary);
    if summary.unverified > 0 {
        println!(
            "  Unverified: {}",
            style(summary.unverified).yellow().bold()
        );
    }

    Ok(())
}
