// Confirmation capability injected before destructive actions.
//
// Purpose
// - Replace blocking user prompts with something tests and transports can answer deterministically.
//
// Responsibilities
// - Any `Fn(&str) -> bool` is a confirmation collaborator; the prompt is what a view would show.

pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers every prompt with the same decision. Used when the caller already decided,
/// for example an HTTP request carrying `confirm=true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
