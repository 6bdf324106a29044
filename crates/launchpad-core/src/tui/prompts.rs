//! Charm-style CLI prompts using cliclack

use crate::ui::{Choice, Ui, Validator};
use std::io;

/// [`Ui`] backed by cliclack's inline prompts
#[derive(Debug, Default)]
pub struct ClackUi;

impl ClackUi {
    pub fn new() -> Self {
        Self
    }
}

/// cliclack reports Esc / Ctrl+C inside a prompt as `Interrupted`
fn cancellable<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e),
    }
}

impl Ui for ClackUi {
    fn intro(&mut self, title: &str) -> io::Result<()> {
        cliclack::intro(title)
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::info(message)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::success(message)
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::error(message)
    }

    fn note(&mut self, title: &str, body: &str) -> io::Result<()> {
        cliclack::note(title, body)
    }

    fn outro(&mut self, message: &str) -> io::Result<()> {
        cliclack::outro(message)
    }

    fn cancel(&mut self, message: &str) -> io::Result<()> {
        cliclack::outro_cancel(message)
    }

    fn select(&mut self, prompt: &str, choices: &[Choice]) -> io::Result<Option<usize>> {
        // Build select prompt - use indices to avoid borrow issues
        let mut select = cliclack::select(prompt);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(idx, &choice.label, &choice.hint);
        }
        cancellable(select.interact())
    }

    fn input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        validate: Validator,
    ) -> io::Result<Option<String>> {
        let result = cliclack::input(prompt)
            .placeholder(placeholder)
            .validate(move |value: &String| validate(value.as_str()))
            .interact::<String>();
        cancellable(result)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<Option<bool>> {
        cancellable(cliclack::confirm(prompt).initial_value(default).interact())
    }
}
