use std::io::{self, IsTerminal};

/// Returns true when stdin is fed by a pipe or file rather than a terminal.
pub fn stdin_is_piped() -> bool {
    !io::stdin().is_terminal()
}
