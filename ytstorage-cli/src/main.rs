// ytstorage-cli/src/main.rs
//
// Entry point for the ytstorage command-line tool.
//
// Responsibilities include:
// - Parsing the channel URL and options.
// - Setting up logging to stderr.
// - Running the analysis against the real downloader.
// - Printing the report, or the error, and choosing the exit code.
//
// Every failure, including argument errors, exits with code 1.

use clap::Parser;
use console::style;
use std::io;
use std::process;
use ytstorage_cli::{Cli, logging, run_analyze};
use ytstorage_core::SystemCommandRunner;

fn main() {
    // clap exits with 2 on usage errors; this tool reports them with 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    logging::init(cli.verbose);

    let mut stdout = io::stdout().lock();
    if let Err(e) = run_analyze(&cli, &SystemCommandRunner, &mut stdout) {
        eprintln!("{} {}", style("Error:").red().bold().for_stderr(), e);
        process::exit(1);
    }
}
