//! Terminal interaction seam used by the scaffolding workflow
//!
//! The workflow only talks to a [`Ui`], so the same steps run behind the
//! cliclack prompts in the binary and a scripted implementation in tests.

use std::io;

/// One entry of a single-choice prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub hint: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: hint.into(),
        }
    }
}

/// Live validator for text input: `Err` carries the message to show
pub type Validator = Box<dyn Fn(&str) -> Result<(), String>>;

/// Output and prompts used by [`crate::scaffold::run`].
///
/// Prompt methods return `Ok(None)` when the user cancels.
pub trait Ui {
    fn intro(&mut self, title: &str) -> io::Result<()>;
    fn info(&mut self, message: &str) -> io::Result<()>;
    fn success(&mut self, message: &str) -> io::Result<()>;
    fn warning(&mut self, message: &str) -> io::Result<()>;
    fn error(&mut self, message: &str) -> io::Result<()>;

    /// Boxed multi-line message with a title
    fn note(&mut self, title: &str, body: &str) -> io::Result<()>;

    /// Closing line of a successful run
    fn outro(&mut self, message: &str) -> io::Result<()>;

    /// Closing line of a cancelled run
    fn cancel(&mut self, message: &str) -> io::Result<()>;

    /// Single-choice prompt; returns the index of the chosen item
    fn select(&mut self, prompt: &str, choices: &[Choice]) -> io::Result<Option<usize>>;

    /// Text prompt, re-asked until `validate` accepts the answer
    fn input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        validate: Validator,
    ) -> io::Result<Option<String>>;

    /// Yes/no prompt
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<Option<bool>>;
}
