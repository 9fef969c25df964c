//! Terminal confirmation prompt.

use std::io::{self, BufRead, Write};

use seatview::ClientError;
use seatview::review::{ConfirmationPrompt, ConfirmationView, render_confirmation};

use super::output::io_error;

/// Question printed after the summary.
pub const PROMPT_QUESTION: &str = "Share this review? [y/N] ";

/// Prints the rendered summary to stderr and reads the answer from stdin.
#[derive(Debug, Clone)]
pub struct TerminalPrompt {
    template: String,
    assume_yes: bool,
}

impl TerminalPrompt {
    /// Creates a prompt rendering `template`. With `assume_yes` the summary
    /// is still printed but no answer is read.
    #[must_use]
    pub fn new(template: impl Into<String>, assume_yes: bool) -> Self {
        Self {
            template: template.into(),
            assume_yes,
        }
    }

    /// Runs the prompt against explicit streams.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Template`] when the summary cannot be rendered
    /// and [`ClientError::Io`] when either stream fails.
    pub fn confirm_with<R, W>(
        &self,
        view: &ConfirmationView,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<bool, ClientError>
    where
        R: BufRead,
        W: Write,
    {
        let summary = render_confirmation(&self.template, view)?;
        writeln!(writer, "{summary}").map_err(|e| io_error(&e))?;

        if self.assume_yes {
            return Ok(true);
        }

        write!(writer, "{PROMPT_QUESTION}").map_err(|e| io_error(&e))?;
        writer.flush().map_err(|e| io_error(&e))?;

        let mut answer = String::new();
        reader.read_line(&mut answer).map_err(|e| io_error(&e))?;
        Ok(is_affirmative(&answer))
    }
}

impl ConfirmationPrompt for TerminalPrompt {
    fn confirm(&self, view: &ConfirmationView) -> Result<bool, ClientError> {
        let mut stdin = io::stdin().lock();
        let mut stderr = io::stderr().lock();
        self.confirm_with(view, &mut stdin, &mut stderr)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
