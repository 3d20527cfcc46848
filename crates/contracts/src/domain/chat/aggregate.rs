use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Роль говорящего в диалоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }

    /// Display label shown next to a turn.
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "Assistant",
        }
    }
}

/// Одна реплика диалога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Создать реплику пользователя
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Создать реплику ассистента
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Лента диалога.
///
/// Turns are only ever added, one user/assistant pair per completed
/// round-trip, and are never edited or reordered afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatLog {
    turns: Vec<ChatTurn>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Записать завершённый обмен: вопрос пользователя и ответ ассистента.
    pub fn append_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push(ChatTurn::user(question));
        self.turns.push(ChatTurn::assistant(answer));
    }
}

impl IntoIterator for ChatLog {
    type Item = ChatTurn;
    type IntoIter = std::vec::IntoIter<ChatTurn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(ChatRole::from_str("user"), Ok(ChatRole::User));
        assert_eq!(ChatRole::from_str("assistant"), Ok(ChatRole::Assistant));
        assert_eq!(ChatRole::User.as_str(), "user");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
        assert!(ChatRole::from_str("system").is_err());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(ChatRole::User.label(), "You");
        assert_eq!(ChatRole::Assistant.label(), "Assistant");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChatRole::User).unwrap(),
            "\"user\""
        );
        assert_eq!(
            serde_json::from_str::<ChatRole>("\"assistant\"").unwrap(),
            ChatRole::Assistant
        );
    }

    #[test]
    fn test_append_exchange_pairs_turns() {
        let mut log = ChatLog::new();
        log.append_exchange("Hello", "Hi there");

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].role, ChatRole::User);
        assert_eq!(log.turns()[0].content, "Hello");
        assert_eq!(log.turns()[1].role, ChatRole::Assistant);
        assert_eq!(log.turns()[1].content, "Hi there");
    }

    #[test]
    fn test_append_exchange_preserves_existing_turns() {
        let mut log = ChatLog::new();
        log.append_exchange("first question", "first answer");
        let earlier: Vec<(ChatRole, String)> = log
            .turns()
            .iter()
            .map(|t| (t.role, t.content.clone()))
            .collect();

        log.append_exchange("second question", "second answer");

        assert_eq!(log.len(), 4);
        for (turn, (role, content)) in log.turns().iter().zip(earlier) {
            assert_eq!(turn.role, role);
            assert_eq!(turn.content, content);
        }
        assert_eq!(log.turns()[2].content, "second question");
        assert_eq!(log.turns()[3].content, "second answer");
    }

    #[test]
    fn test_turn_ids_are_distinct() {
        let mut log = ChatLog::new();
        log.append_exchange("q", "a");
        assert_ne!(log.turns()[0].id, log.turns()[1].id);
    }
}
