//! # chatviz CLI
//!
//! Command-line interface for the chatviz library.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use chatviz::analysis::{chat_text, growth_series, sender_frequencies, sender_text, word_frequencies};
use chatviz::cli::{Args, Command};
use chatviz::error::{ChatvizError, Result};
use chatviz::export::read_export;
use chatviz::render::{render_growth, render_histogram, render_wordcloud};
use chatviz::scan::find_exports;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Growth { file, first_names, output } => run_growth(&file, first_names, &output),
        Command::Frequency { file, first_names, output } => {
            run_frequency(&file, first_names, &output)
        }
        Command::Wordcloud { file, dir, user, max_words, output } => {
            run_wordcloud(file, dir, user, max_words, &output)
        }
    }
}

fn run_growth(file: &Path, first_names: bool, output: &Path) -> Result<()> {
    let export = read_export(file)?;
    let messages = export.normalize()?;
    println!("📖 {} — {} messages", export.title, messages.len());

    let series = growth_series(&messages)?;
    render_growth(&export.title, &series, first_names, output)?;

    println!("✅ Growth chart saved to {}", output.display());
    Ok(())
}

fn run_frequency(file: &Path, first_names: bool, output: &Path) -> Result<()> {
    let export = read_export(file)?;
    let messages = export.normalize()?;
    println!("📖 {} — {} messages", export.title, messages.len());

    let frequencies = sender_frequencies(&messages);
    render_histogram(&export.title, &frequencies, first_names, output)?;

    println!(
        "✅ Frequency histogram for {} senders saved to {}",
        frequencies.len(),
        output.display()
    );
    Ok(())
}

fn run_wordcloud(
    file: Option<PathBuf>,
    dir: Option<PathBuf>,
    user: Option<String>,
    max_words: usize,
    output: &Path,
) -> Result<()> {
    let (title, text) = match (file, dir, user) {
        (Some(file), None, _) => {
            let export = read_export(&file)?;
            let messages = export.normalize()?;
            println!("📖 {} — {} messages", export.title, messages.len());
            (format!("Word Cloud for {}", export.title), chat_text(&messages))
        }
        (None, Some(dir), Some(user)) => {
            let exports = find_exports(&dir)?;
            println!("📂 Found {} chats under {}", exports.len(), dir.display());

            let mut bodies = Vec::new();
            for path in &exports {
                let export = read_export(path)?;
                let messages = export.normalize()?;
                let text = sender_text(&messages, &user);
                if !text.is_empty() {
                    bodies.push(text);
                }
            }
            (format!("Word Cloud for {user}"), bodies.join(" "))
        }
        // clap enforces the file/dir group; this is a backstop.
        _ => {
            return Err(ChatvizError::Usage(
                "specify either --file, or --dir together with --user".into(),
            ));
        }
    };

    let words = word_frequencies(&text, max_words);
    render_wordcloud(&title, &words, output)?;

    println!(
        "✅ Word cloud with {} words saved to {}",
        words.len(),
        output.display()
    );
    Ok(())
}
