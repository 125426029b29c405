pub mod engine;
pub mod line;

pub use engine::InquirePrompter;
pub use line::LinePrompter;

/// Operator interaction used when detection needs a human decision.
///
/// A cancelled prompt (Esc, Ctrl-C inside the prompt, closed input) is never
/// an error: `ask_path` returns `None` and `confirm` returns `false`.
pub trait Prompter {
    /// Ask for a free-text path. `None` means the operator gave no answer.
    fn ask_path(&mut self, message: &str) -> Option<String>;

    /// Ask a yes/no question that defaults to "no".
    fn confirm(&mut self, message: &str) -> bool;
}
