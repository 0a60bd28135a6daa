use contracts::domain::a004_ai_advisor::chat::ChatMessage;
use leptos::prelude::*;

/// Transcript and composer state of the data chat.
#[derive(Clone, Copy)]
pub struct AiChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl AiChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(vec![ChatMessage::greeting()]),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    pub fn can_send(&self) -> bool {
        !self.is_sending.get() && is_sendable(&self.input.get())
    }

    /// Appends the question and clears the composer. Returns the text to
    /// send, or `None` for a blank question.
    pub fn begin(&self, question: &str) -> Option<String> {
        if !is_sendable(question) {
            return None;
        }
        let question = question.to_string();
        self.messages.update(|m| m.push(ChatMessage::user(question.clone())));
        self.input.set(String::new());
        self.is_sending.set(true);
        Some(question)
    }

    pub fn finish(&self, reply: ChatMessage) {
        self.messages.update(|m| m.push(reply));
        self.is_sending.set(false);
    }
}

impl Default for AiChatVm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_sendable(question: &str) -> bool {
    !question.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_questions_are_ignored() {
        assert!(!is_sendable(""));
        assert!(!is_sendable("   \t"));
        assert!(is_sendable(" stock? "));
    }
}
