use anyhow::{Context, Result};
use clap::Parser;
use knuthsort::EmptyArgPolicy;
use std::env;
use std::ffi::OsString;
use std::io;
use std::iter;
use tracing_subscriber::EnvFilter;

/// Sort single characters given as arguments and print them space-separated.
#[derive(Parser, Debug)]
#[command(name = "knuthsort", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Characters to sort; only the first byte of each argument is used.
    #[arg(
        value_name = "CHAR",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    chars: Vec<OsString>,
}

impl Cli {
    /// Parses `args` (binary name first) so that every later argument is data.
    ///
    /// A `--` is spliced in after the binary name; clap consumes that one as
    /// its end-of-options marker, and every user argument after it, `--`
    /// included, lands in `chars` verbatim.
    fn parse_verbatim<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("knuthsort"));
        Self::try_parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(args))
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the sorted characters.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse_verbatim(env::args_os()).unwrap_or_else(|err| err.exit());
    tracing::debug!(args = cli.chars.len(), "parsed command line");

    let stdout = io::stdout();
    knuthsort::run(cli.chars, EmptyArgPolicy::Reject, &mut stdout.lock())
        .context("sorting command-line characters")?;
    Ok(())
}
