// src/bin/cli.rs
use mint_check::cli;

fn main() {
    let _ = color_eyre::install();

    if let Err(e) = cli::run() {
        cli::report_failure(std::io::stdout(), &e);
        std::process::exit(1);
    }
}
