//! CLI argument parsing for the cfid tool.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cfid",
    about = "Generate a CFID for a file. The CFID is constructed from the file's \
             creation timestamp, context (filename), and an optional random suffix, \
             wrapped in ⭐️ and ❤️, and trimmed to fit a maximum total length.",
    version,
    after_help = "Logs are written to: ~/.local/share/cfid/logs/cfid.log"
)]
pub struct Cli {
    /// Path to the file
    pub file_path: PathBuf,

    /// Precision level for the timestamp (1=year, 2=year+month, 3=year+month+day, etc.)
    #[arg(short = 't', long = "precision", default_value = "6", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub precision: u8,

    /// Maximum length of the context
    #[arg(short = 'c', long = "context-length", default_value = "100")]
    pub context_length: usize,

    /// Length of the random suffix (0 = no suffix)
    #[arg(short = 'r', long = "random-length", default_value = "0")]
    pub random_length: usize,

    /// Maximum total length of the ID
    #[arg(short = 'm', long = "max-length", default_value = "127")]
    pub max_length: usize,

    /// Character set to use for the random suffix
    #[arg(short = 's', long = "charset")]
    pub charset: Option<String>,

    /// Replace whitespace with underscore characters in the context
    #[arg(short = 'w', long = "replace-whitespace")]
    pub replace_whitespace: bool,

    /// Format the output as key/value JSON
    #[arg(short = 'j', long = "json")]
    pub json: bool,
}
