//! Wellness coach chat: canned replies with an optional completion backend
//!
//! Canned-reply keywords match whole words only, case-insensitively:
//! "Hi there" gets the greeting, "this" does not.

use crate::error::CoachError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Instructions handed to a completion backend ahead of the conversation
pub const COACH_PROMPT: &str = "You are a helpful wellness coach. Provide supportive, positive \
advice about mental health, fitness, nutrition, and general well-being. Keep responses concise \
and encouraging. Do not provide medical diagnoses or treatment plans.";

const CANNED_REPLIES: [(&str, &str); 2] = [
    ("hi", "hi dear , how can i assist you today"),
    ("hello", "Hey there! How can I support your wellness today?"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, sender: Sender) -> Self {
        let timestamp = Utc::now();
        ChatMessage {
            id: timestamp.timestamp_millis().to_string(),
            content: content.into(),
            sender,
            timestamp,
        }
    }
}

/// Produces free-form replies for messages no canned reply covers
pub trait CompletionBackend {
    fn complete(
        &self,
        prompt: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> std::result::Result<String, CoachError>;
}

fn canned_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CANNED_REPLIES
            .iter()
            .map(|(keyword, reply)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                let re = Regex::new(&pattern).expect("canned reply keyword is a valid pattern");
                (re, *reply)
            })
            .collect()
    })
}

pub struct Coach {
    backend: Option<Box<dyn CompletionBackend>>,
}

impl Coach {
    /// A coach that only answers from its canned replies
    pub fn new() -> Self {
        Coach { backend: None }
    }

    pub fn with_backend(mut self, backend: Box<dyn CompletionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    fn canned_reply(&self, message: &str) -> Option<&'static str> {
        canned_patterns()
            .iter()
            .find(|(pattern, _)| pattern.is_match(message))
            .map(|(_, reply)| *reply)
    }

    /// Answer `message`. A keyword match wins; otherwise the backend is asked.
    /// On failure nothing is produced and the caller's history stays as it was.
    pub fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> std::result::Result<ChatMessage, CoachError> {
        let normalized = message.trim();

        if let Some(reply) = self.canned_reply(normalized) {
            return Ok(ChatMessage::new(reply, Sender::Assistant));
        }

        let backend = self.backend.as_ref().ok_or(CoachError::MissingCredential)?;
        let content = backend.complete(COACH_PROMPT, history, normalized)?;
        Ok(ChatMessage::new(content, Sender::Assistant))
    }
}

impl Default for Coach {
    fn default() -> Self {
        Coach::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl CompletionBackend for Echo {
        fn complete(
            &self,
            _prompt: &str,
            history: &[ChatMessage],
            message: &str,
        ) -> std::result::Result<String, CoachError> {
            Ok(format!("{} ({} earlier)", message, history.len()))
        }
    }

    struct Broken;

    impl CompletionBackend for Broken {
        fn complete(
            &self,
            _prompt: &str,
            _history: &[ChatMessage],
            _message: &str,
        ) -> std::result::Result<String, CoachError> {
            Err(CoachError::RequestFailed("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_canned_reply_matches_whole_word() {
        let coach = Coach::new();
        let reply = coach.reply("  Hello coach!", &[]).unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(
            reply.content,
            "Hey there! How can I support your wellness today?"
        );

        let reply = coach.reply("HI", &[]).unwrap();
        assert_eq!(reply.content, "hi dear , how can i assist you today");
    }

    #[test]
    fn test_every_canned_keyword_compiles() {
        assert_eq!(canned_patterns().len(), CANNED_REPLIES.len());
    }

    #[test]
    fn test_keyword_inside_word_does_not_match() {
        let coach = Coach::new();
        let err = coach.reply("this is about sleep", &[]).unwrap_err();
        assert!(matches!(err, CoachError::MissingCredential));
    }

    #[test]
    fn test_backend_handles_unmatched() {
        let coach = Coach::new().with_backend(Box::new(Echo));
        let history = vec![ChatMessage::new("earlier", Sender::User)];
        let reply = coach.reply("how much water?", &history).unwrap();
        assert_eq!(reply.content, "how much water? (1 earlier)");
    }

    #[test]
    fn test_backend_failure_is_reported() {
        let coach = Coach::new().with_backend(Box::new(Broken));
        match coach.reply("tips please", &[]) {
            Err(CoachError::RequestFailed(msg)) => assert_eq!(msg, "quota exceeded"),
            other => panic!("expected request failure, got {:?}", other),
        }
    }
}
