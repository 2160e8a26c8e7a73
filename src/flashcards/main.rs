use clap::Parser;
use flashcards::config::FlashcardsConfig;
use flashcards::console::TerminalConsole;
use flashcards::error::Result;
use flashcards::repl::Repl;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

const LOG_ENV: &str = "FLASHCARDS_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("flashcards=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("flashcards=warn"))
    };

    // stdout belongs to the quiz, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let paths = config.startup_paths(cli.import_from, cli.export_to);
    tracing::debug!(?paths, "starting session");

    let mut repl = Repl::new(TerminalConsole::new()).with_export_on_exit(paths.export_to);
    if let Some(path) = &paths.import_from {
        repl.import_on_start(path)?;
    }
    repl.run()
}

fn load_config(cli: &Cli) -> Result<FlashcardsConfig> {
    match &cli.config {
        Some(path) => FlashcardsConfig::load_file(path),
        None => match FlashcardsConfig::default_dir() {
            Ok(dir) => FlashcardsConfig::load(dir),
            Err(err) => {
                tracing::debug!(error = %err, "falling back to default config");
                Ok(FlashcardsConfig::default())
            }
        },
    }
}
