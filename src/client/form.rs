use async_trait::async_trait;
use thiserror::Error;

use super::outcome::{Outcome, Reply};

/// Anything that can carry one prompt to the gateway and bring back its reply.
#[async_trait]
pub trait ReviewBackend: Send + Sync {
    async fn send(&self, prompt: &str) -> Reply;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Displaying(Outcome),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("nothing to review")]
    EmptyInput,
    #[error("a review is already in flight")]
    InFlight,
}

/// The review form: one input buffer and a three-state lifecycle.
#[derive(Debug)]
pub struct ReviewForm {
    input: String,
    state: FormState,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewForm {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: FormState::Idle,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            FormState::Displaying(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state != FormState::Submitting && !self.input.trim().is_empty()
    }

    /// Moves to `Submitting` and returns the prompt to send.
    pub fn begin(&mut self) -> Result<String, SubmitBlocked> {
        if self.state == FormState::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if self.input.trim().is_empty() {
            return Err(SubmitBlocked::EmptyInput);
        }
        self.state = FormState::Submitting;
        Ok(self.input.clone())
    }

    /// Records the reply of the in-flight submission.
    pub fn complete(&mut self, reply: &Reply) -> Outcome {
        let outcome = Outcome::from(reply);
        self.state = FormState::Displaying(outcome.clone());
        outcome
    }

    /// One full cycle: guard, send exactly once, display.
    pub async fn submit<B>(&mut self, backend: &B) -> Result<Outcome, SubmitBlocked>
    where
        B: ReviewBackend + ?Sized,
    {
        let prompt = self.begin()?;
        let reply = backend.send(&prompt).await;
        Ok(self.complete(&reply))
    }
}
