use clap::{Parser, Subcommand};

/// Command-line surface for the separator generator.
#[derive(Parser)]
#[command(
    name = "gensep",
    version,
    about = "Generates fixed-width section separator comments",
    long_about = "Generates the fixed-width separator comments used to divide source \
files into sections.\n\nRun without arguments to start interactive mode; pipe label \
lines through stdin for batch output."
)]
pub struct Cli {
    /// Emit a single section banner for this label and exit
    pub label: Option<String>,

    /// Print layout details alongside each banner
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit a section banner; without a label, a full divider row
    Section { label: Option<String> },

    /// Emit a subsection rule in line-comment form
    Sub {
        label: Option<String>,

        /// Close the subsection instead of opening it
        #[arg(short, long)]
        end: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_token_parses_as_label() {
        let cli = Cli::try_parse_from(["gensep", "Memory Management"]).unwrap();
        assert_eq!(cli.label.as_deref(), Some("Memory Management"));
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn section_label_is_optional() {
        let cli = Cli::try_parse_from(["gensep", "section"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Section { label: None })
        ));
    }

    #[test]
    fn sub_accepts_end_flag() {
        let cli = Cli::try_parse_from(["gensep", "sub", "--end", "Lexer"]).unwrap();
        match cli.command {
            Some(Commands::Sub { label, end }) => {
                assert_eq!(label.as_deref(), Some("Lexer"));
                assert!(end);
            }
            _ => panic!("expected the sub subcommand"),
        }
    }

    #[test]
    fn no_arguments_selects_interactive_mode() {
        let cli = Cli::try_parse_from(["gensep"]).unwrap();
        assert!(cli.label.is_none());
        assert!(cli.command.is_none());
    }
}
