//! Bounded conversation memory.

use docbot_core::ChatMessage;
use std::collections::VecDeque;

/// Keeps the most recent messages of a conversation.
#[derive(Debug, Clone)]
pub struct ChatMemory {
    messages: VecDeque<ChatMessage>,
    max_messages: usize,
}

impl ChatMemory {
    /// Create a window holding at most `max_messages` messages.
    pub fn with_max_messages(max_messages: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(max_messages + 1),
            max_messages: max_messages.max(1),
        }
    }

    /// Append a message, evicting the oldest ones beyond the window.
    pub fn add(&mut self, message: ChatMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_messages {
            self.messages.pop_front();
        }
    }

    /// Snapshot of the window, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for ChatMemory {
    fn default() -> Self {
        Self::with_max_messages(10)
    }
}
