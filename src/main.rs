mod core;
mod tasks;
mod utils;

use clap::Parser;
use std::io;

use crate::core::banner;
use crate::core::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    execute(args)
}

fn execute(args: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Some(Commands::Section { label }) => {
            emit_section(label.as_deref().unwrap_or(""), args.verbose);
        }
        Some(Commands::Sub { label, end }) => {
            let label = label.as_deref().unwrap_or("");
            if end {
                println!("{}", banner::sub_end(label));
            } else {
                println!("{}", banner::sub(label));
            }
        }
        None => {
            if let Some(label) = args.label {
                emit_section(&label, args.verbose);
            } else if utils::stdin_is_piped() {
                let stdin = io::stdin();
                tasks::batch::run(stdin.lock(), &mut io::stdout().lock())?;
            } else {
                tasks::repl::run(args.verbose)?;
            }
        }
    }

    Ok(())
}

/// Prints one section banner, preceded by its layout summary when verbose.
fn emit_section(label: &str, verbose: bool) {
    if verbose {
        println!("\x1b[32m{}\x1b[0m", banner::describe(label));
    }
    println!("{}", banner::section(label));
}
