//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Visualize exported chat archives: growth curves, frequency histograms,
/// and word clouds, written as SVG.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatviz")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatviz growth message.json
    chatviz growth message.json --first-names -o growth.svg
    chatviz frequency message.json
    chatviz wordcloud --file message.json --max-words 150
    chatviz wordcloud --dir ~/archive/messages/inbox --user 'Jane Doe'")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Plot per-sender message-count growth over time
    Growth {
        /// Path to the chat export file
        file: PathBuf,

        /// Shorten sender names to first names in the legend
        #[arg(short = 'n', long)]
        first_names: bool,

        /// Output SVG path
        #[arg(short, long, default_value = "growth.svg")]
        output: PathBuf,
    },

    /// Plot how many messages each sender has sent
    Frequency {
        /// Path to the chat export file
        file: PathBuf,

        /// Shorten sender names to first names on the axis
        #[arg(short = 'n', long)]
        first_names: bool,

        /// Output SVG path
        #[arg(short, long, default_value = "frequency.svg")]
        output: PathBuf,
    },

    /// Draw a word cloud for one chat, or for one user across all chats
    Wordcloud {
        /// Path to the chat export file
        #[arg(short = 'F', long, value_name = "FILE", required_unless_present = "dir", conflicts_with = "dir")]
        file: Option<PathBuf>,

        /// Directory holding all chats (one `message.json` per leaf directory)
        #[arg(short = 'D', long, value_name = "DIR", requires = "user")]
        dir: Option<PathBuf>,

        /// User display name, as it appears in the exports (with `--dir`)
        #[arg(short, long, value_name = "NAME")]
        user: Option<String>,

        /// Maximum number of words in the cloud
        #[arg(short, long, default_value_t = 200)]
        max_words: usize,

        /// Output SVG path
        #[arg(short, long, default_value = "wordcloud.svg")]
        output: PathBuf,
    },
}
