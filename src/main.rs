use anagrams::config::{self, AppConfig, OutputFormat};
use anagrams::{output, validate, InputError, Letters};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "anagrams")]
#[command(version, about = "Print every anagram of a set of distinct letters")]
#[command(long_about = "\
Print every anagram of a set of distinct letters

Anagrams are printed one per line in lexicographic (code point) order.
Letters may come from any alphabet and are case-sensitive: 'a' and 'A'
are different letters. Surrounding whitespace is ignored.

  $ anagrams abc
  abc
  acb
  bac
  bca
  cab
  cba

Without LETTERS, one line is read from standard input.

Exit status is 0 on success and 1 on any error (empty input, a non-letter,
a repeated letter, a bad config file).

Run 'anagrams gen-config' to generate a documented anagrams.toml.")]
#[command(args_conflicts_with_subcommands = true)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Distinct letters to rearrange (read from stdin when omitted)
    letters: Option<String>,

    /// Config file (defaults to ./anagrams.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the number of anagrams to stderr afterwards
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock anagrams.toml with all options documented
    GenConfig,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("input has {len} letters; the configured limit is {max}")]
    TooManyLetters { len: usize, max: usize },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let mut app_config = config::load_optional(cli.config.as_deref(), Path::new("."))?;
    if let Some(format) = cli.format {
        app_config.output.format = format;
    }
    app_config.output.summary |= cli.summary;

    let input = match cli.letters {
        Some(letters) => Some(letters),
        None => read_line(&app_config.input.prompt)?,
    };

    let letters = validate::validate(input.as_deref())?;
    check_limit(letters, &app_config)?;
    let result = anagrams::enumerate(letters);

    output::print_anagrams(&result, app_config.output.format)?;
    if app_config.output.summary {
        output::print_summary(result.len());
    }
    Ok(())
}

/// Read one line from stdin. `None` on end of input.
///
/// The prompt is only shown to a terminal so piped output stays clean.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
    }

    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

/// Enforce `input.max_letters`. Runs after validation, so an invalid input
/// reports its own error rather than the limit.
fn check_limit(letters: Letters<'_>, app_config: &AppConfig) -> Result<(), CliError> {
    match app_config.input.max_letters {
        Some(max) if letters.count() > max => Err(CliError::TooManyLetters {
            len: letters.count(),
            max,
        }),
        _ => Ok(()),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Ignore the error: only fails if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}
