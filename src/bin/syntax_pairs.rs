use colored::Colorize;
use std::env;
use std::io;
use std::process::ExitCode;
use syntax_pairs::{ShowcaseConfig, ShowcaseError};

fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// The only recognised argument is `--config <path>`; anything else is
/// reported and skipped.
fn load_config() -> Result<ShowcaseConfig, ShowcaseError> {
    let mut config_path = None;
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(path),
                None => warn("--config needs a path, using defaults"),
            },
            other => warn(&format!("ignoring argument '{}'", other)),
        }
    }

    match config_path {
        Some(path) => ShowcaseConfig::load(path),
        None => Ok(ShowcaseConfig::default()),
    }
}

async fn run(config: &ShowcaseConfig) -> Result<(), ShowcaseError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let transcript = syntax_pairs::run(&mut out, config).await?;

    if config.verbose {
        eprintln!(
            "{} {} lines, checksums {} / {}",
            "done:".green(),
            transcript.lines,
            transcript.async_checksum,
            transcript.legacy_checksum
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let outcome = match load_config() {
        Ok(config) => run(&config).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
