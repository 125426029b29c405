use std::io::{BufRead, Write};

use crate::prompt::Prompter;

/// Reads answers one line at a time, for when stdin is a pipe or file.
///
/// End of input answers every remaining prompt with "no".
pub struct LinePrompter<R> {
    input: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_answer(&mut self, message: &str) -> Option<String> {
        print!("   {message} ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                println!();
                tracing::debug!("input closed while prompting");
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                println!();
                tracing::warn!("cannot read answer, treating as no answer: {e}");
                None
            }
        }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask_path(&mut self, message: &str) -> Option<String> {
        self.read_answer(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.read_answer(&format!("{message} [y/N]:"))
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[test]
    fn test_reads_paths_line_by_line() {
        let mut prompter = LinePrompter::new(Cursor::new("~/first\n  /second  \n"));
        assert_eq!(prompter.ask_path("Path:").as_deref(), Some("~/first"));
        assert_eq!(prompter.ask_path("Path:").as_deref(), Some("/second"));
        assert_eq!(prompter.ask_path("Path:"), None);
    }

    #[test]
    fn test_empty_line_is_an_empty_answer() {
        let mut prompter = LinePrompter::new(Cursor::new("\n"));
        assert_eq!(prompter.ask_path("Path:").as_deref(), Some(""));
    }

    #[rstest]
    #[case("y\n", true)]
    #[case("YES\n", true)]
    #[case("n\n", false)]
    #[case("\n", false)]
    #[case("sure\n", false)]
    #[case("", false)]
    fn test_confirm_answers(#[case] input: &str, #[case] expected: bool) {
        let mut prompter = LinePrompter::new(Cursor::new(input));
        assert_eq!(prompter.confirm("Overwrite?"), expected);
    }
}
