use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Error;
use crate::message::ErrorMessage;

/// Append operation on the conversation log owned by the surrounding state container.
pub trait MessageSink {
    fn append(&self, message: ErrorMessage) -> Result<(), Error>;
}

impl<F> MessageSink for F
where
    F: Fn(ErrorMessage),
{
    fn append(&self, message: ErrorMessage) -> Result<(), Error> {
        self(message);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl MessageSink for NoopSink {
    fn append(&self, _message: ErrorMessage) -> Result<(), Error> {
        Ok(())
    }
}

/// Append-only, in-memory conversation log. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    inner: Arc<Mutex<Vec<ErrorMessage>>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<ErrorMessage> {
        self.entries().clone()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn last(&self) -> Option<ErrorMessage> {
        self.entries().last().cloned()
    }

    // Entries are never rewritten, so a poisoned lock still guards a consistent vec.
    fn entries(&self) -> MutexGuard<'_, Vec<ErrorMessage>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageSink for ConversationLog {
    fn append(&self, message: ErrorMessage) -> Result<(), Error> {
        self.entries().push(message);
        Ok(())
    }
}
