//! `rich-text`: run delta operations from the command line.
//!
//! Usage:
//!   rich-text compose '<delta-json>' < document.json
//!   rich-text transform '<delta-json>' right < concurrent.json
//!
//! The first operand is read from stdin. Set `RUST_LOG=debug` for diagnostics.

use std::io::{self, Read, Write};

use rich_text::cli::{run, Command, USAGE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match args.first().map(|c| c.parse::<Command>()) {
        Some(Ok(command)) => command,
        Some(Err(e)) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(1);
        }
        None => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(command, buf.trim(), &args[1..]) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
