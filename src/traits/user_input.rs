use anyhow::Result;
use std::collections::VecDeque;
use std::io::IsTerminal;
use std::sync::Mutex;

/// Response type for mock user input
#[derive(Debug, Clone)]
pub enum MockResponse {
    Password(String),
    /// Simulates the terminal closing (EOF / Ctrl-D) before an answer
    Eof,
}

/// Trait for user input operations to enable testing with mocks
pub trait UserInput: Send + Sync {
    /// Whether a human can answer prompts (stdin is attached to a terminal)
    fn is_interactive(&self) -> bool;

    /// Display a password prompt with input echo disabled
    fn password(&self, prompt: &str) -> Result<String>;
}

/// Real user input implementation using inquire crate
pub struct InquireUserInput;

impl UserInput for InquireUserInput {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn password(&self, prompt: &str) -> Result<String> {
        use inquire::{Password, PasswordDisplayMode, required};
        let answer = Password::new(prompt)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Hidden)
            .with_validator(required!("A value is required"))
            .prompt()?;
        Ok(answer)
    }
}

/// Mock user input implementation for testing
pub struct MockUserInput {
    interactive: bool,
    responses: Mutex<VecDeque<MockResponse>>,
    prompts: Mutex<Vec<String>>,
}

impl MockUserInput {
    /// Create new interactive mock with no pre-configured responses
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Create interactive mock with pre-configured responses
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        Self {
            interactive: true,
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that behaves like a pipeline with no terminal attached
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            ..Self::new()
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Get the next response from the queue
    fn next_response(&self) -> Result<MockResponse> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No more mock responses available"))
    }
}

impl Default for MockUserInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for MockUserInput {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn password(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.next_response()? {
            MockResponse::Password(answer) => Ok(answer),
            MockResponse::Eof => anyhow::bail!("Input stream closed before an answer was read"),
        }
    }
}
