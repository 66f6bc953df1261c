//! Scripted dialog surface recording every prompt it is shown.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use magidesk_pages::DialogSurface;

/// A prompt observed by the scripted surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// A yes/no prompt and the answer that was returned.
    Confirm {
        /// Prompt title.
        title: String,
        /// Prompt body.
        message: String,
        /// Answer handed back to the caller.
        answer: bool,
    },
    /// An error message.
    Error {
        /// Message title.
        title: String,
        /// Message body.
        message: String,
    },
}

/// Dialog surface answering from a script and recording everything.
///
/// Confirmations pop queued answers; once the queue is empty every prompt is
/// accepted.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: Mutex<VecDeque<bool>>,
    events: Mutex<Vec<DialogEvent>>,
}

impl ScriptedDialogs {
    /// Construct a surface that accepts every prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next confirmation prompt.
    pub fn push_answer(&self, answer: bool) {
        self.answers
            .lock()
            .expect("dialog answer queue poisoned")
            .push_back(answer);
    }

    /// Every event observed so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<DialogEvent> {
        self.events
            .lock()
            .expect("dialog event log poisoned")
            .clone()
    }

    /// The most recent error event, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<(String, String)> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                DialogEvent::Error { title, message } => Some((title, message)),
                DialogEvent::Confirm { .. } => None,
            })
    }

    fn record(&self, event: DialogEvent) {
        self.events
            .lock()
            .expect("dialog event log poisoned")
            .push(event);
    }
}

#[async_trait]
impl DialogSurface for ScriptedDialogs {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        let answer = self
            .answers
            .lock()
            .expect("dialog answer queue poisoned")
            .pop_front()
            .unwrap_or(true);
        self.record(DialogEvent::Confirm {
            title: title.to_string(),
            message: message.to_string(),
            answer,
        });
        answer
    }

    async fn show_error(&self, title: &str, message: &str) {
        self.record(DialogEvent::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
