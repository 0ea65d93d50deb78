use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use average::config::{Config, EofPolicy, OutputFormat};
use average::error;
use average::output;

#[derive(Parser)]
#[command(
    name = "average",
    version,
    about = "Average the non-negative integers read from stdin, up to a negative sentinel"
)]
struct Cli {
    /// Output format (overrides the config file).
    #[arg(long)]
    format: Option<OutputFormat>,

    /// What to do if input ends before a negative number is read.
    #[arg(long)]
    on_eof: Option<EofPolicy>,

    /// Config file to use instead of ./average.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(2);
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::load(&cwd)
        }
    };

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(on_eof) = cli.on_eof {
        config.on_eof = on_eof;
    }

    let summary = average::average(io::stdin().lock(), config.on_eof)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    output::reporter_for(config.format).report(&summary, &mut writer)?;
    writer.flush()?;
    Ok(())
}
