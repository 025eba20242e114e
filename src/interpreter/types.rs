//! Interpreter result types.

/// What a command produced. Exactly one outcome per call; the signal
/// variants carry no text, so illegal combinations (an error that also
/// clears the screen, say) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Normal output, possibly empty.
    Output(String),
    /// A single-line error message.
    Error(String),
    /// Caller should discard the transcript.
    ClearScreen,
    /// Caller should switch input handling into chat mode.
    EnterChatMode,
}

/// The result of executing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// The command token the line dispatched to (lowercased for builtins,
    /// as typed for scripts, empty for blank input).
    pub command: String,
    pub outcome: Outcome,
}

impl CommandResult {
    pub fn output(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self { command: command.into(), outcome: Outcome::Output(output.into()) }
    }

    pub fn error(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self { command: command.into(), outcome: Outcome::Error(message.into()) }
    }

    pub fn clear_screen(command: impl Into<String>) -> Self {
        Self { command: command.into(), outcome: Outcome::ClearScreen }
    }

    pub fn enter_chat_mode(command: impl Into<String>) -> Self {
        Self { command: command.into(), outcome: Outcome::EnterChatMode }
    }

    /// The printable text of this result; empty for the signal variants.
    pub fn output_text(&self) -> &str {
        match &self.outcome {
            Outcome::Output(text) | Outcome::Error(text) => text,
            Outcome::ClearScreen | Outcome::EnterChatMode => "",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}
