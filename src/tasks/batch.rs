use std::io::{BufRead, Write};

use crate::core::banner;

/// Formats every line of a non-interactive input stream, keeping the same
/// blank-line framing the prompt loop prints.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> std::io::Result<()> {
    for line in input.lines() {
        let label = line?;
        writeln!(out, "\n{}\n", banner::section(&label))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn frames_every_banner_with_blank_lines() {
        let mut out = Vec::new();
        run(Cursor::new("\nx\nend\n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "\n{}\n\n\n{}\n\n\n{}\n\n",
            banner::section(""),
            banner::section("x"),
            banner::section("end"),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn keeps_surrounding_spaces_in_labels() {
        let mut out = Vec::new();
        run(Cursor::new("  padded  \n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("/* =----   padded   -"));
    }

    #[test]
    fn empty_input_emits_nothing() {
        let mut out = Vec::new();
        run(Cursor::new(""), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
