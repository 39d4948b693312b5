use crate::core::banner;

use super::input;

/// Runs the interactive prompt loop until input is exhausted or interrupted.
pub fn run(verbose: bool) -> Result<(), String> {
    let mut rl = input::new_editor()?;

    loop {
        let label = match input::read_label(&mut rl)? {
            Some(label) => label,
            None => break,
        };

        if verbose {
            println!("\x1b[32m{}\x1b[0m", banner::describe(&label));
        }

        println!("\n{}\n", banner::section(&label));
    }

    Ok(())
}
