#[path = "mailsyntax-cli/args.rs"]
mod args;
#[path = "mailsyntax-cli/output.rs"]
mod output;

use anyhow::{Context, Result};
use mailsyntax_lib::email_validate;
use std::io::{self, BufRead};

use args::{Cli, Commands};
use output::{OutputRow, any_invalid, write_reports};

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "with-tracing")]
    init_tracing(cli.verbose)?;

    let mut rows: Vec<OutputRow> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            rows.push(check(&cli, &email)?);
        }
    } else if let Some(Commands::Validate { email }) = &cli.cmd {
        rows.push(check(&cli, email)?);
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    if any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}

fn check(cli: &Cli, email: &str) -> Result<OutputRow> {
    let result = email_validate(&cli.request(email))?;
    Ok(OutputRow::new(email, result))
}

#[cfg(feature = "with-tracing")]
fn init_tracing(verbose: bool) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("tracing init failed: {err}"))
}
