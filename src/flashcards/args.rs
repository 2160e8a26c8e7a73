use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashcards", version)]
#[command(about = "Memorize everything!", long_about = None)]
pub struct Cli {
    /// Deck file to load before the first prompt
    #[arg(long = "import_from", visible_alias = "import-from", value_name = "PATH")]
    pub import_from: Option<PathBuf>,

    /// Deck file to save the cards to on exit
    #[arg(long = "export_to", visible_alias = "export-to", value_name = "PATH")]
    pub export_to: Option<PathBuf>,

    /// Config file (defaults to config.json in the config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
