use std::process::{self, ExitCode};

use clap::Parser;
use sid2str::SidComponents;

/// Decode a binary Windows SID from its hex encoding into the canonical
/// `S-R-I-S...` text form.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Hex-encoded SID, e.g. 01020000000000052000000020020000
    hex: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The decode itself is instantaneous; the handler covers an interrupt
    // while output is still being written.
    let _ = ctrlc::set_handler(|| {
        eprintln!("interrupted");
        process::exit(130);
    });

    if cli.hex.trim().is_empty() {
        eprintln!("error: empty hex string");
        return ExitCode::FAILURE;
    }

    match SidComponents::from_hex(&cli.hex) {
        Ok(sid) => {
            println!("{sid}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
