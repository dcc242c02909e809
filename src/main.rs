use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use unique_chars::find_duplicate;

/// Checks that no non-space printable ASCII character repeats in each input
#[derive(Parser, Debug)]
#[command(name = "unique-chars")]
#[command(version, about, long_about = None)]
struct Args {
    /// Strings to check, one result line per string. Flags go before the
    /// first input; unknown dash-prefixed strings such as `-!` are inputs.
    #[arg(allow_hyphen_values = true)]
    inputs: Vec<OsString>,

    /// Follow each `false` with the repeated character and its positions
    #[arg(long, short)]
    report: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    for input in &args.inputs {
        match find_duplicate(input.as_encoded_bytes()) {
            Ok(None) => writeln!(stdout, "true")?,
            Ok(Some(duplicate)) => {
                writeln!(stdout, "false")?;
                if args.report {
                    writeln!(stdout, "{duplicate}")?;
                }
            }
            Err(e) => {
                stdout.flush()?;
                info!(
                    "byte {byte:#04x} at index {position}",
                    byte = e.byte(),
                    position = e.position()
                );
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
