use inquire::{Confirm, InquireError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("unable to read confirmation from the terminal")]
    #[diagnostic(
        code(cotree::prompt::confirm),
        help("Run without --confirm when stdin is not a terminal")
    )]
    Confirm(#[source] InquireError),
}

/// Asks whether the previewed tree should be written to disk.
///
/// Cancelling the prompt with Esc counts as declining, Ctrl-C is an error.
pub fn apply_changes() -> Result<bool, PromptError> {
    let answer = Confirm::new("Create these entries?")
        .with_default(false)
        .with_help_message("Press [y] to confirm or [n] to cancel")
        .prompt();

    match answer {
        Ok(confirmed) => Ok(confirmed),
        Err(InquireError::OperationCanceled) => Ok(false),
        Err(error) => Err(PromptError::Confirm(error)),
    }
}
