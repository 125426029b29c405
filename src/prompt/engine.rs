use inquire::InquireError;

use crate::prompt::Prompter;

/// Terminal prompts backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask_path(&mut self, message: &str) -> Option<String> {
        match inquire::Text::new(message)
            .with_help_message("Press Enter on an empty line to skip")
            .prompt()
        {
            Ok(answer) => Some(answer),
            Err(e) => {
                log_cancel(&e);
                None
            }
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        match inquire::Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                log_cancel(&e);
                false
            }
        }
    }
}

fn log_cancel(err: &InquireError) {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            tracing::debug!("prompt cancelled by operator");
        }
        other => tracing::warn!("prompt unavailable, treating as no answer: {other}"),
    }
}
