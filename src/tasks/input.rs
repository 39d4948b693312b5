use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Prompt shown before every label read.
const PROMPT: &str = "Label name: ";

/// Initializes the line editor with in-memory history.
pub fn new_editor() -> Result<DefaultEditor, String> {
    DefaultEditor::new().map_err(|err| format!("Error: {}", err))
}

/// Reads one label from the prompt. Returns `None` once input is exhausted
/// or the user interrupts. The line passes through verbatim; only the
/// trailing newline is stripped.
pub fn read_label(rl: &mut DefaultEditor) -> Result<Option<String>, String> {
    match rl.readline(PROMPT) {
        Ok(line) => {
            if !line.is_empty() {
                rl.add_history_entry(line.as_str())
                    .map_err(|_| "Error adding history".to_string())?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(format!("Error: {:?}", err)),
    }
}
