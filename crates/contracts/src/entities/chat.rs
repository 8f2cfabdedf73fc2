use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{ChatId, EngagementId, MessageId, UserId};

/// Represents a message within a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDTO {
    /// Message identifier
    #[schema(value_type = String)]
    pub id: MessageId,
    /// User who sent the message
    #[schema(value_type = String)]
    pub sender_id: UserId,
    /// Display name of the sender at send time
    pub sender_name: String,
    /// Message text
    pub message: String,
    /// When the message was sent
    pub created: DateTime<Utc>,
}

/// A conversation attached to an engagement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatDTO {
    /// Chat identifier
    #[schema(value_type = String)]
    pub id: ChatId,
    /// Engagement the chat belongs to
    #[schema(value_type = String)]
    pub engagement_id: EngagementId,
    /// Chat title
    pub name: String,
    /// Most recent message, `null` for an empty chat
    pub last_message: Option<MessageDTO>,
    /// Whether the viewer has seen the latest message
    pub seen: bool,
    /// Full message history in insertion order
    pub messages: Vec<MessageDTO>,
}

/// Live update pushed to subscribers of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageStreamDTO {
    /// Chat the message was posted to
    #[schema(value_type = String)]
    pub conversation_id: ChatId,
    /// The posted message
    pub message: MessageDTO,
}

impl MessageDTO {
    pub fn new(
        id: impl Into<MessageId>,
        sender_id: impl Into<UserId>,
        sender_name: impl Into<String>,
        message: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            message: message.into(),
            created,
        }
    }
}

impl ChatDTO {
    /// The explicit last message, or the newest one in the history
    pub fn latest_message(&self) -> Option<&MessageDTO> {
        self.last_message
            .as_ref()
            .or_else(|| self.messages.iter().max_by_key(|message| message.created))
    }

    /// Check if the chat has no messages at all
    pub fn is_empty(&self) -> bool {
        self.last_message.is_none() && self.messages.is_empty()
    }
}

impl MessageStreamDTO {
    pub fn new(conversation_id: impl Into<ChatId>, message: MessageDTO) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            message,
        }
    }

    /// Check if this event belongs to the given chat
    pub fn is_for(&self, chat: &ChatDTO) -> bool {
        self.conversation_id == chat.id
    }
}
