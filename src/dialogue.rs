//! # Guided acquisition dialogue
//!
//! Overview
//! -----------------
//! The sequencer walks the [field catalog](crate::catalog) in order, one
//! question per turn, validating each submission and accumulating a
//! [`ParameterSet`]. It is an **explicit state machine**: every transition
//! returns the messages to present instead of emitting them as a side
//! effect, so the whole dialogue is testable without any UI attached.
//!
//! State model
//! -----------------
//! ```text
//! Greeting --open()--> AwaitingAnswer --submit()*9--> Complete --fail()--> Failed
//! ```
//!
//! * `Greeting` – session created, nothing asked yet. [`DialogueSession::open`]
//!   emits the greeting lines followed by the first prompt.
//! * `AwaitingAnswer` – one field is pending at `cursor`. A rejected
//!   submission echoes the input, reports the reason and stays put; an
//!   accepted one stores the value and either asks the next field or
//!   finishes.
//! * `Complete` – all nine fields answered. The parameter set is handed to
//!   the submission gate exactly once via [`DialogueSession::take_completed`].
//! * `Failed` – the analysis service reported a failure after hand-off;
//!   terminal until a fresh session replaces this one.
//!
//! Submissions outside `AwaitingAnswer` (including after `Complete`) are
//! no-ops that return no messages, which closes both the duplicate-completion
//! edge case and re-entrant submissions while a hand-off is in flight.
//!
//! Presentation pacing (typing delays, greeting pauses) is a UI concern;
//! the core contract is only the order of the returned messages.

use tracing::{debug, info};

use crate::catalog;
use crate::parameters::ParameterSet;
use crate::validator::{self, Validation};

/// Opening lines of every session, emitted before the first question.
pub const GREETING_INTRO: &str = "Hello, Commander! I'm Zeto, your AI exoplanet detection \
     assistant. I'll help you analyze astronomical data to determine if we've found a new world.";
pub const GREETING_TASK: &str =
    "I need to collect some parameters from your observations. Let's begin!";

const ACK_NEXT: &str = "Got it! Next parameter...";
const ACK_COMPLETE: &str =
    "Perfect! I have all the data I need. Initiating Zeto deep space analysis...";

/// Lifecycle phase of one dialogue session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Greeting,
    Asking,
    AwaitingAnswer,
    Complete,
    Failed,
}

/// Who a message appears to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

/// One outgoing message for the presentation layer to render, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
    pub is_error: bool,
}

impl Message {
    pub fn bot(content: impl Into<String>) -> Self {
        Message {
            sender: Sender::Bot,
            content: content.into(),
            is_error: false,
        }
    }

    pub fn bot_error(content: impl Into<String>) -> Self {
        Message {
            sender: Sender::Bot,
            content: content.into(),
            is_error: true,
        }
    }

    /// The user's own submission, echoed into the conversation history.
    pub fn user_echo(content: impl Into<String>) -> Self {
        Message {
            sender: Sender::User,
            content: content.into(),
            is_error: false,
        }
    }
}

/// State of one acquisition dialogue, owned exclusively by the session.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    cursor: usize,
    parameters: ParameterSet,
    phase: Phase,
    handed_off: bool,
}

impl Default for DialogueSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueSession {
    /// Fresh session: cursor at the first field, empty parameter set.
    pub fn new() -> Self {
        DialogueSession {
            cursor: 0,
            parameters: ParameterSet::new(),
            phase: Phase::Greeting,
            handed_off: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Progress pair `(current question number, total)`, 1-based, for the
    /// presentation layer's progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        let total = catalog::list().len();
        ((self.cursor + 1).min(total), total)
    }

    /// Open the session: greet, then ask the first question.
    ///
    /// Return
    /// ----------
    /// * The greeting lines followed by the first prompt, in presentation
    ///   order. Calling `open` in any phase but `Greeting` is a no-op that
    ///   returns no messages.
    pub fn open(&mut self) -> Vec<Message> {
        if self.phase != Phase::Greeting {
            return Vec::new();
        }

        let mut messages = vec![Message::bot(GREETING_INTRO), Message::bot(GREETING_TASK)];
        self.phase = Phase::Asking;
        messages.extend(self.ask_current());
        messages
    }

    /// Handle one raw textual submission for the field at `cursor`.
    ///
    /// The raw input is always echoed as a user message first, even when it
    /// is rejected, so the conversational history stays faithful. A rejected
    /// submission adds exactly one error message and changes nothing else; an
    /// accepted one stores the value and either asks the next field or
    /// completes the session.
    ///
    /// Arguments
    /// -----------------
    /// * `raw`: The submission exactly as typed. Blank input is ignored.
    ///
    /// Return
    /// ----------
    /// * The messages to present, in order. Empty when the submission was
    ///   blank or the session is not awaiting an answer.
    pub fn submit(&mut self, raw: &str) -> Vec<Message> {
        if self.phase != Phase::AwaitingAnswer || raw.trim().is_empty() {
            return Vec::new();
        }

        let field = catalog::by_index(self.cursor)
            .expect("cursor stays within the catalog while awaiting an answer");

        let mut messages = vec![Message::user_echo(raw)];

        match validator::validate(raw, field) {
            Validation::Rejected(reason) => {
                debug!(field = field.key, %reason, "submission rejected");
                messages.push(Message::bot_error(format!("⚠️ {reason} Please try again.")));
            }
            Validation::Accepted(value) => {
                debug!(field = field.key, value, "submission accepted");
                self.parameters.insert(field.key, value);

                if self.cursor + 1 < catalog::list().len() {
                    self.cursor += 1;
                    self.phase = Phase::Asking;
                    messages.push(Message::bot(ACK_NEXT));
                    messages.extend(self.ask_current());
                } else {
                    self.phase = Phase::Complete;
                    info!("parameter set complete, ready for analysis");
                    messages.push(Message::bot(ACK_COMPLETE));
                }
            }
        }

        messages
    }

    /// Hand the completed parameter set to the submission gate.
    ///
    /// Yields `Some` exactly once, the first time it is called after the
    /// session reaches `Complete`; every later call returns `None`. This is
    /// what guarantees the analysis service is invoked at most once per
    /// session. The session keeps its own copy for diagnostics and export.
    pub fn take_completed(&mut self) -> Option<ParameterSet> {
        if self.phase != Phase::Complete || self.handed_off {
            return None;
        }
        self.handed_off = true;
        Some(self.parameters.clone())
    }

    /// Record that the submission gate reported a failure. Terminal: the
    /// session accepts no further input and cannot be re-submitted.
    pub fn fail(&mut self) {
        if self.phase == Phase::Complete {
            self.phase = Phase::Failed;
        }
    }

    /// Emit the prompt for the field at `cursor` (question and hint combined
    /// into one message) and move to `AwaitingAnswer`.
    fn ask_current(&mut self) -> Vec<Message> {
        debug_assert_eq!(self.phase, Phase::Asking);

        let Some(field) = catalog::by_index(self.cursor) else {
            return Vec::new();
        };

        self.phase = Phase::AwaitingAnswer;
        vec![Message::bot(format!("{}\n\n💡 {}", field.prompt, field.hint))]
    }
}

#[cfg(test)]
mod dialogue_test {
    use super::*;

    #[test]
    fn test_open_greets_before_first_prompt() {
        let mut session = DialogueSession::new();
        let messages = session.open();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, GREETING_INTRO);
        assert_eq!(messages[1].content, GREETING_TASK);
        assert!(messages[2].content.starts_with("What is the orbital period"));
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_open_twice_is_noop() {
        let mut session = DialogueSession::new();
        session.open();
        assert!(session.open().is_empty());
    }

    #[test]
    fn test_blank_submission_ignored() {
        let mut session = DialogueSession::new();
        session.open();
        assert!(session.submit("   ").is_empty());
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_rejection_keeps_cursor_and_parameters() {
        let mut session = DialogueSession::new();
        session.open();

        let messages = session.submit("abc");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::user_echo("abc"));
        assert!(messages[1].is_error);
        assert!(messages[1].content.contains("Please enter a valid number."));

        assert_eq!(session.cursor(), 0);
        assert!(session.parameters().is_empty());
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }
}
